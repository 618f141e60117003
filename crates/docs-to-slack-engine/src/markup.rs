//! Engine-owned view of a parsed markup document.
//!
//! The external HTML parser ([`scraper`], html5ever underneath) owns its own
//! DOM types; this module converts them once into [`MarkupNode`] so the rest of
//! the engine only ever sees an immutable tree of elements and text.

use scraper::{Html, Node};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("markup produced no document element: {0}")]
    NoDocumentElement(String),
}

/// One node of the markup tree, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<MarkupNode>,
    },
    Text {
        content: String,
    },
}

impl MarkupNode {
    pub fn element(
        tag: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<MarkupNode>,
    ) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Element tag name (lowercase, as html5ever normalizes it), `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[MarkupNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text { .. } => &[],
        }
    }

    /// First value for `name`, document order, `None` if absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Self::Text { .. } => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.tag(), Some("ul" | "ol"))
    }

    pub fn is_ordered_list(&self) -> bool {
        self.tag() == Some("ol")
    }

    pub fn is_list_item(&self) -> bool {
        self.tag() == Some("li")
    }

    /// Block-level tags whose text is emitted as one standalone line.
    pub fn is_text_block(&self) -> bool {
        matches!(
            self.tag(),
            Some("p" | "blockquote" | "pre" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
        )
    }
}

/// Parse an HTML string and return the document element as a [`MarkupNode`].
///
/// html5ever recovers from malformed input the way a browser does, so the
/// error exit only fires for input the parser could not shape into a document
/// at all.
pub fn parse(html: &str) -> Result<MarkupNode, ParseError> {
    let dom = Html::parse_document(html);
    dom.tree
        .root()
        .children()
        .filter(|n| n.value().is_element())
        .find_map(convert)
        .ok_or_else(|| ParseError::NoDocumentElement(dom.errors.join("; ")))
}

fn convert(node: ego_tree::NodeRef<'_, Node>) -> Option<MarkupNode> {
    match node.value() {
        Node::Text(text) => Some(MarkupNode::text(text.text.to_string())),
        Node::Element(element) => Some(MarkupNode::Element {
            tag: element.name().to_string(),
            attributes: element
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: node.children().filter_map(convert).collect(),
        }),
        // Doctype, comments and processing instructions carry no content.
        _ => None,
    }
}
