//! Line-based writer for the bar protocol stream
//!
//! The stream is one header object, a line holding `[`, then one array per
//! record terminated by `,`. The outer array is never closed.

use anyhow::{bail, Context, Result};
use barline_types::{BlockAttributes, ProtocolHeader};
use std::io::Write;

/// Writes the header once and records after it
pub struct ProtocolWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> ProtocolWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Write the header object and the opening `[` line.
    ///
    /// Fails if called more than once.
    pub fn write_header(&mut self, header: &ProtocolHeader) -> Result<()> {
        if self.header_written {
            bail!("Protocol header has already been written");
        }
        serde_json::to_writer(&mut self.out, header).context("Failed to serialize header")?;
        self.out
            .write_all(b"\n[\n")
            .context("Failed to write protocol header")?;
        self.out.flush().context("Failed to flush protocol header")?;
        self.header_written = true;
        Ok(())
    }

    /// Write one record as a JSON array followed by `,` and a newline
    pub fn write_record(&mut self, blocks: &[&BlockAttributes]) -> Result<()> {
        if !self.header_written {
            bail!("Protocol record written before the header");
        }
        serde_json::to_writer(&mut self.out, blocks).context("Failed to serialize record")?;
        self.out
            .write_all(b",\n")
            .context("Failed to write protocol record")?;
        self.out.flush().context("Failed to flush protocol record")?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn block(name: &str, text: &str) -> BlockAttributes {
        BlockAttributes {
            full_text: Some(text.to_string()),
            ..BlockAttributes::named(name)
        }
    }

    #[test]
    fn test_stream_framing() {
        let mut writer = ProtocolWriter::new(Vec::new());
        writer
            .write_header(&ProtocolHeader::new(10, 12, true))
            .unwrap();
        let time = block("time", "12:30");
        let date = block("date", "05.03.2024");
        writer.write_record(&[&time, &date]).unwrap();
        writer.write_record(&[&time, &date]).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"{"version":1,"stop_signal":10,"cont_signal":12,"click_events":true}"#
        );
        assert_eq!(lines[1], "[");
        assert_eq!(
            lines[2],
            r#"[{"full_text":"12:30","name":"time"},{"full_text":"05.03.2024","name":"date"}],"#
        );
        assert_eq!(lines[2], lines[3]);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_records_are_valid_json_arrays() {
        let mut writer = ProtocolWriter::new(Vec::new());
        writer.write_header(&ProtocolHeader::new(10, 12, true)).unwrap();
        let quoted = block("net", "Caf\u{e9} \"guest\"");
        writer.write_record(&[&quoted]).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let header: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert!(header.is_object());

        let record = text.lines().nth(2).unwrap();
        let body = record.strip_suffix(',').unwrap();
        let parsed: Vec<BlockAttributes> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, vec![quoted]);
    }

    #[test]
    fn test_header_only_once() {
        let mut writer = ProtocolWriter::new(Vec::new());
        let header = ProtocolHeader::new(10, 12, false);
        writer.write_header(&header).unwrap();
        assert!(writer.write_header(&header).is_err());
        assert_eq!(writer.get_ref().iter().filter(|&&b| b == b'[').count(), 1);
    }

    #[test]
    fn test_record_before_header_is_rejected() {
        let mut writer = ProtocolWriter::new(Vec::new());
        assert!(writer.write_record(&[]).is_err());
        assert!(writer.get_ref().is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut writer = ProtocolWriter::new(BrokenPipe);
        assert!(writer
            .write_header(&ProtocolHeader::new(10, 12, true))
            .is_err());
    }
}
