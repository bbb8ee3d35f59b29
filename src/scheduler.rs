//! Main loop: emit one record per tick, pausing on the stop signal

use crate::control::Control;
use crate::protocol::ProtocolWriter;
use anyhow::Result;
use barline_core::StatusLine;
use barline_types::ProtocolHeader;
use crossbeam::channel::{Receiver, TryRecvError};
use log::{debug, info, trace, warn};
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

/// Whether the loop is currently producing records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Drives the status line at a fixed tick until the process exits
pub struct MainLoop<W: Write> {
    status_line: StatusLine,
    writer: ProtocolWriter<W>,
    header: ProtocolHeader,
    tick: Duration,
    controls: Receiver<Control>,
    state: RunState,
}

impl<W: Write> MainLoop<W> {
    pub fn new(
        status_line: StatusLine,
        writer: ProtocolWriter<W>,
        header: ProtocolHeader,
        tick: Duration,
        controls: Receiver<Control>,
    ) -> Self {
        Self {
            status_line,
            writer,
            header,
            tick,
            controls,
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn writer(&self) -> &ProtocolWriter<W> {
        &self.writer
    }

    /// Write the protocol header; must happen before the first step
    pub fn start(&mut self) -> Result<()> {
        self.writer.write_header(&self.header)
    }

    /// One tick: honour pending stop/cont requests, then emit a record.
    ///
    /// Blocks while paused. A stop that arrives while the blocks refresh
    /// discards the record computed in that tick. The record written after a
    /// resume comes from a fresh staleness check at the resume instant.
    pub fn step(&mut self) -> Result<()> {
        loop {
            drain_controls(&self.controls, &mut self.state);
            if self.state == RunState::Paused {
                self.wait_for_resume();
            }

            let record = self.status_line.emit_at(Instant::now());

            drain_controls(&self.controls, &mut self.state);
            if self.state == RunState::Paused {
                debug!("Stop arrived during refresh; dropping record");
                continue;
            }
            return self.writer.write_record(&record);
        }
    }

    /// Write the header and run forever; only returns on a write error
    pub fn run(&mut self) -> Result<()> {
        if !self.writer.header_written() {
            self.start()?;
        }
        info!(
            "Emitting {} blocks every {:?}",
            self.status_line.len(),
            self.tick
        );

        loop {
            let started = Instant::now();
            self.step()?;
            let elapsed = started.elapsed();
            if elapsed > self.tick {
                debug!("Tick took {:?} (tick is {:?})", elapsed, self.tick);
            } else {
                trace!("Tick took {:?}", elapsed);
            }
            thread::sleep(self.tick);
        }
    }

    fn wait_for_resume(&mut self) {
        info!("Output paused");
        while self.state == RunState::Paused {
            match self.controls.recv() {
                Ok(Control::Cont) => self.state = RunState::Running,
                Ok(Control::Stop) => trace!("Already paused"),
                Err(_) => {
                    warn!("Signal listener is gone; resuming output");
                    self.state = RunState::Running;
                }
            }
        }
        info!("Output resumed");
    }
}

/// Apply every queued control message; the last one wins
fn drain_controls(controls: &Receiver<Control>, state: &mut RunState) {
    loop {
        match controls.try_recv() {
            Ok(Control::Stop) => *state = RunState::Paused,
            Ok(Control::Cont) => *state = RunState::Running,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
}
