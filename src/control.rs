//! Pause/resume control driven by the renderer's stop and cont signals
//!
//! A listener thread turns signal deliveries into `Control` messages; the
//! main loop is the only receiver, so no block state is touched from signal
//! context.

use anyhow::{bail, Context, Result};
use crossbeam::channel::{self, Receiver};
use log::debug;
use signal_hook::iterator::Signals;
use std::thread;

/// Message sent to the main loop for each received signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Stop,
    Cont,
}

/// Check that both signals can be caught by this process
pub fn check_signals(stop_signal: i32, cont_signal: i32) -> Result<()> {
    for signal in [stop_signal, cont_signal] {
        if signal_hook::consts::FORBIDDEN.contains(&signal) {
            bail!("Signal {} cannot be caught and is unusable for pause/resume", signal);
        }
    }
    if stop_signal == cont_signal {
        bail!("Stop and cont signal must differ (both are {})", stop_signal);
    }
    Ok(())
}

/// Register the signals and start forwarding them as `Control` messages
pub fn spawn_signal_listener(stop_signal: i32, cont_signal: i32) -> Result<Receiver<Control>> {
    check_signals(stop_signal, cont_signal)?;

    let mut signals = Signals::new([stop_signal, cont_signal])
        .with_context(|| format!("Failed to register signals {} and {}", stop_signal, cont_signal))?;
    let (tx, rx) = channel::unbounded();

    thread::Builder::new()
        .name("barline-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                let control = if signal == stop_signal {
                    Control::Stop
                } else {
                    Control::Cont
                };
                debug!("Received signal {} -> {:?}", signal, control);
                if tx.send(control).is_err() {
                    break;
                }
            }
        })
        .context("Failed to spawn signal listener thread")?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_hook::consts::{SIGKILL, SIGSTOP, SIGUSR1, SIGUSR2};
    use std::time::Duration;

    #[test]
    fn test_uncatchable_signals_are_rejected() {
        assert!(check_signals(SIGSTOP, SIGUSR2).is_err());
        assert!(check_signals(SIGUSR1, SIGKILL).is_err());
        assert!(check_signals(SIGUSR1, SIGUSR1).is_err());
        assert!(check_signals(SIGUSR1, SIGUSR2).is_ok());
    }

    #[test]
    fn test_signals_are_forwarded_in_order() {
        let rx = spawn_signal_listener(SIGUSR1, SIGUSR2).unwrap();

        signal_hook::low_level::raise(SIGUSR1).unwrap();
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)).unwrap(),
            Control::Stop
        );

        signal_hook::low_level::raise(SIGUSR2).unwrap();
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)).unwrap(),
            Control::Cont
        );
    }
}
