//! Rich-text delta: an ordered sequence of insert operations, the shape Slack's
//! `slack/texty` clipboard flavor expects.
//!
//! Serialization order is load-bearing: receivers compare field order, so the
//! structs declare `insert` before `attributes` and `list` before `indent`,
//! and absent fields are omitted rather than serialized as null.

mod generate;

pub use generate::{GenerationResult, extract_text, generate, generate_from_tree};

use serde::Serialize;

/// List flavor carried on a newline insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Bullet,
    Ordered,
}

/// Attributes attached to a list item's newline insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAttributes {
    pub list: ListStyle,
    /// Nesting level when > 0; level 0 carries no indent at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
}

/// A single insert operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaOp {
    pub insert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<LineAttributes>,
}

impl DeltaOp {
    /// Bare text insert, no attributes.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: text.into(),
            attributes: None,
        }
    }

    /// Unattributed newline terminating a plain block.
    pub fn newline() -> Self {
        Self::text("\n")
    }

    /// Newline terminating a list item at the given zero-based level.
    pub fn list_newline(list: ListStyle, level: u32) -> Self {
        Self {
            insert: "\n".to_string(),
            attributes: Some(LineAttributes {
                list,
                indent: (level > 0).then_some(level),
            }),
        }
    }
}

/// The full operation sequence, serialized as `{"ops": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub ops: Vec<DeltaOp>,
}
