use std::io::{self, Write};

use docs_to_slack_engine::ClipboardSink;

/// Sink that writes clipboard content to any byte stream (stdout or a file).
///
/// The plain-text fallback of a rich write has nowhere to go in a single
/// stream, so only the binary payload is written; pasteboard-backed sinks
/// would set both flavors.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ClipboardSink for WriterSink<W> {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    fn set_rich(&mut self, payload: &[u8], _fallback_text: &str) -> io::Result<()> {
        self.writer.write_all(payload)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_text_writes_line() {
        let mut out = Vec::new();
        WriterSink::new(&mut out).set_text("- Item").unwrap();
        assert_eq!(out, b"- Item\n");
    }

    #[test]
    fn set_rich_writes_raw_payload() {
        let mut out = Vec::new();
        WriterSink::new(&mut out)
            .set_rich(&[1, 2, 3, 0], "fallback")
            .unwrap();
        assert_eq!(out, vec![1, 2, 3, 0]);
    }
}
