pub mod clipboard;
pub mod delta;
pub mod markup;
pub mod pickle;

// Re-export key types for easier usage
pub use clipboard::{ClipboardSink, CopyError, CopyMode, copy_to_sink};
pub use delta::{
    Delta, DeltaOp, GenerationResult, LineAttributes, ListStyle, generate, generate_from_tree,
};
pub use markup::{MarkupNode, ParseError};
pub use pickle::{PickleWriter, payload};
