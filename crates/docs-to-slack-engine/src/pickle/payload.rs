//! Assembly of the clipboard payload: entry count, then key/value string
//! pairs, the whole thing framed by its own byte length.

use super::{PickleWriter, frame};
use crate::delta::GenerationResult;

/// Clipboard format key for the plain-text fallback entry.
pub const PLAIN_TEXT_KEY: &str = "public.utf8-plain-text";
/// Clipboard format key Slack reads its rich-text delta from.
pub const TEXTY_KEY: &str = "slack/texty";

/// Encode a generation result as the framed web-custom-data payload.
///
/// Layout: `u32` total inner length, `u32` entry count (2), then the
/// plain-text and delta-JSON entries as length-prefixed UTF-16 pairs.
pub fn encode_clipboard_payload(result: &GenerationResult) -> Result<Vec<u8>, serde_json::Error> {
    let texty_json = serde_json::to_string(&result.delta)?;

    let mut writer = PickleWriter::new();
    writer.write_entries(&[
        (PLAIN_TEXT_KEY, result.plain_text.as_str()),
        (TEXTY_KEY, texty_json.as_str()),
    ]);
    Ok(frame(&writer.into_payload()))
}
