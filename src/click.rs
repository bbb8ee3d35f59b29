//! Click events from the renderer
//!
//! With `click_events` enabled the renderer writes an endless JSON array of
//! click objects to our stdin, one per line. They are drained and logged so
//! the pipe never fills up; clicks do not trigger refreshes.

use anyhow::{Context, Result};
use barline_types::ClickEvent;
use log::{debug, warn};
use std::borrow::Cow;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

/// Parse one line of the click stream.
///
/// Returns `None` for framing-only lines (the opening `[` or blanks).
pub fn parse_click_line(line: &str) -> Option<Result<ClickEvent, serde_json::Error>> {
    let body = line.trim().trim_start_matches(',').trim_end_matches(',').trim();
    if body.is_empty() || body == "[" {
        return None;
    }
    Some(serde_json::from_str(body))
}

/// Read click lines until EOF, logging each event; returns how many events
/// were parsed.
///
/// Invalid UTF-8 is replaced rather than ending the stream, so the pipe
/// keeps draining.
pub fn drain_clicks<R: BufRead>(mut input: R) -> usize {
    let mut events = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Failed to read click events: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("Click event line is not valid UTF-8");
        }
        match parse_click_line(&line) {
            Some(Ok(event)) => {
                events += 1;
                debug!(
                    "Click on '{}' (button {})",
                    event.name.as_deref().unwrap_or("?"),
                    event.button
                );
            }
            Some(Err(e)) => warn!("Ignoring malformed click event {:?}: {}", line, e),
            None => {}
        }
    }
    debug!("Click event stream closed after {} events", events);
    events
}

/// Drain `input` on a background thread, logging every click event
pub fn spawn_click_reader<R>(input: R) -> Result<JoinHandle<usize>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("barline-clicks".to_string())
        .spawn(move || drain_clicks(input))
        .context("Failed to spawn click event reader")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_framing_lines_are_skipped() {
        assert!(parse_click_line("[").is_none());
        assert!(parse_click_line("  ").is_none());
        assert!(parse_click_line(",").is_none());
    }

    #[test]
    fn test_leading_comma_is_stripped() {
        let event = parse_click_line(r#",{"name":"time","button":1}"#)
            .unwrap()
            .unwrap();
        assert_eq!(event.name.as_deref(), Some("time"));
        assert_eq!(event.button, 1);
    }

    #[test]
    fn test_malformed_event() {
        assert!(parse_click_line("{\"name\":").unwrap().is_err());
    }

    #[test]
    fn test_reader_drains_until_eof() {
        let input = Cursor::new(
            "[\n{\"name\":\"audio\",\"button\":4}\n,{\"name\":\"audio\",\"button\":5}\ngarbage\n",
        );
        let handle = spawn_click_reader(input).unwrap();
        assert_eq!(handle.join().unwrap(), 2);
    }

    #[test]
    fn test_invalid_utf8_keeps_draining() {
        let mut input = b"[\n{\"name\":\"net\xff\",\"button\":1}\n\xfe\xfe\n".to_vec();
        input.extend_from_slice(b",{\"name\":\"time\",\"button\":3}\n");
        assert_eq!(drain_clicks(Cursor::new(input)), 2);
    }
}
