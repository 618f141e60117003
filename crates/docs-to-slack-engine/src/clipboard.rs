//! Boundary to the host clipboard. The engine never talks to a pasteboard
//! itself; callers plug in a [`ClipboardSink`] and the engine decides what to
//! hand it.

use std::io;

use thiserror::Error;

use crate::delta::GenerationResult;
use crate::pickle::payload::encode_clipboard_payload;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to encode delta JSON: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("clipboard sink rejected the write: {0}")]
    Sink(#[from] io::Error),
}

/// What the sink receives: the plain text alone, or the rich binary payload
/// with the plain text as compatibility fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    TextOnly,
    Rich,
}

/// A clipboard backend. Implementations own the platform mechanics.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> io::Result<()>;
    fn set_rich(&mut self, payload: &[u8], fallback_text: &str) -> io::Result<()>;
}

/// Encode as needed for `mode` and hand the result to the sink.
pub fn copy_to_sink<S: ClipboardSink>(
    sink: &mut S,
    result: &GenerationResult,
    mode: CopyMode,
) -> Result<(), CopyError> {
    match mode {
        CopyMode::TextOnly => sink.set_text(&result.plain_text)?,
        CopyMode::Rich => {
            let payload = encode_clipboard_payload(result)?;
            sink.set_rich(&payload, &result.plain_text)?;
        }
    }
    Ok(())
}
