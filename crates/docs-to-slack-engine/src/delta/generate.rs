//! Walks a markup tree and produces the aligned plain-text and delta-op
//! renderings.
//!
//! Two list-nesting conventions have to coexist here: standard HTML nests a
//! `<ul>` inside the parent `<li>`, while Google Docs flattens everything into
//! one list and marks depth with `aria-level` on each item. The attribute,
//! when present and parseable, always wins over the structural level.

use super::{Delta, DeltaOp, ListStyle};
use crate::markup::{self, MarkupNode, ParseError};

/// Plain text plus delta ops for one markup document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub plain_text: String,
    pub delta: Delta,
}

/// Accumulates the two output sequences while the walkers recurse.
#[derive(Default)]
struct OpsBuilder {
    ops: Vec<DeltaOp>,
    lines: Vec<String>,
}

impl OpsBuilder {
    fn push_block(&mut self, text: &str) {
        self.ops.push(DeltaOp::text(text));
        self.ops.push(DeltaOp::newline());
        self.lines.push(text.to_string());
    }

    fn push_list_item(&mut self, text: &str, style: ListStyle, level: u32, index: u32) {
        self.ops.push(DeltaOp::text(text));
        self.ops.push(DeltaOp::list_newline(style, level));
        let indent = "    ".repeat(level as usize);
        let prefix = match style {
            ListStyle::Bullet => "- ".to_string(),
            ListStyle::Ordered => format!("{index}. "),
        };
        self.lines.push(format!("{indent}{prefix}{text}"));
    }

    fn finish(self) -> GenerationResult {
        GenerationResult {
            plain_text: self.lines.join("\n"),
            delta: Delta { ops: self.ops },
        }
    }
}

/// Concatenated text content of a subtree, document order.
///
/// List subtrees yield nothing: their items are emitted by the list walker,
/// never flattened into surrounding prose.
pub fn extract_text(node: &MarkupNode) -> String {
    match node {
        MarkupNode::Text { content } => content.clone(),
        el if el.is_list() => String::new(),
        el => el.children().iter().map(extract_text).collect(),
    }
}

/// Effective zero-based level for a list item: `aria-level` minus one when the
/// attribute parses as an integer, the inherited structural level otherwise.
fn resolve_level(item: &MarkupNode, inherited: u32) -> u32 {
    item.attribute("aria-level")
        .and_then(|v| v.parse::<u32>().ok())
        .map(|v| v.saturating_sub(1))
        .unwrap_or(inherited)
}

fn walk_list(list: &MarkupNode, level: u32, out: &mut OpsBuilder) {
    let style = if list.is_ordered_list() {
        ListStyle::Ordered
    } else {
        ListStyle::Bullet
    };
    // Per-list counter: restarts at 1 for every list node, nested lists included.
    let mut index = 1u32;

    for child in list.children() {
        if child.is_list_item() {
            let current_level = resolve_level(child, level);

            let mut item_text = String::new();
            let mut nested_lists = Vec::new();
            for grandchild in child.children() {
                match grandchild {
                    MarkupNode::Text { content } => item_text.push_str(content),
                    el if el.is_list() => nested_lists.push(el),
                    el => item_text.push_str(&extract_text(el)),
                }
            }

            let item_text = item_text.trim();
            if !item_text.is_empty() {
                out.push_list_item(item_text, style, current_level, index);
                index += 1;
            }
            // Whitespace-only items still contribute their nested lists.
            for nested in nested_lists {
                walk_list(nested, current_level + 1, out);
            }
        } else if child.is_list() {
            // Google Docs emits nested lists as siblings of their parent item.
            walk_list(child, level + 1, out);
        }
    }
}

fn scan(node: &MarkupNode, out: &mut OpsBuilder) {
    if node.is_list() {
        walk_list(node, 0, out);
        return;
    }
    if node.is_text_block() {
        let text = extract_text(node);
        let text = text.trim();
        if !text.is_empty() {
            out.push_block(text);
        }
        return;
    }
    for child in node.children() {
        scan(child, out);
    }
}

/// Generate from an already-built markup tree. Total: cannot fail.
pub fn generate_from_tree(root: &MarkupNode) -> GenerationResult {
    let mut out = OpsBuilder::default();
    scan(root, &mut out);

    // Nothing recognized anywhere: fall back to one plain-text block for the
    // whole document.
    if out.ops.is_empty() {
        let text = extract_text(root);
        let text = text.trim();
        if !text.is_empty() {
            out.push_block(text);
        }
    }

    out.finish()
}

/// Parse `html` and generate. The parse step is the only error exit.
pub fn generate(html: &str) -> Result<GenerationResult, ParseError> {
    Ok(generate_from_tree(&markup::parse(html)?))
}
