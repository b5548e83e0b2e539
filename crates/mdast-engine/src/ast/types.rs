use serde::Serialize;

use super::{
    escape::resolve_escapes,
    level::{HeadingLevel, NodeError},
};

/// The top of a parsed document.
///
/// Children are kept in source order. A `Root` is never nested inside another
/// node, so it is its own type rather than a [`Node`] variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    children: Vec<Node>,
}

impl Root {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block node. Roots only ever grow at the end.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Vec<Node>> for Root {
    fn from(children: Vec<Node>) -> Self {
        Self { children }
    }
}

impl FromIterator<Node> for Root {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

/// A block-level node.
///
/// Every variant serializes with its own `type` discriminator, so the enum
/// itself is untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Heading(Heading),
    ThematicBreak(ThematicBreak),
    Text(Text),
}

impl Node {
    /// The MDAST `type` name of this node.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Heading(_) => Heading::TYPE,
            Node::ThematicBreak(_) => ThematicBreak::TYPE,
            Node::Text(_) => Text::TYPE,
        }
    }
}

impl From<Heading> for Node {
    fn from(heading: Heading) -> Self {
        Node::Heading(heading)
    }
}

impl From<ThematicBreak> for Node {
    fn from(thematic_break: ThematicBreak) -> Self {
        Node::ThematicBreak(thematic_break)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// An ATX (`## title`) or Setext (`title` + `===`) heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "heading")]
pub struct Heading {
    level: HeadingLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
}

impl Heading {
    pub const TYPE: &'static str = "heading";

    /// Builds a heading from a raw level.
    ///
    /// # Errors
    /// Returns [`NodeError::InvalidHeadingLevel`] when `level` is not in `1..=6`.
    pub fn new(level: u8, text: Option<Text>) -> Result<Self, NodeError> {
        Ok(Self::with_level(HeadingLevel::try_from(level)?, text))
    }

    #[must_use]
    pub fn with_level(level: HeadingLevel, text: Option<Text>) -> Self {
        Self { level, text }
    }

    #[must_use]
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    #[must_use]
    pub fn text(&self) -> Option<&Text> {
        self.text.as_ref()
    }
}

/// A thematic break (`***`, `---`, `___`). Carries no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "thematicBreak")]
pub struct ThematicBreak {}

impl ThematicBreak {
    pub const TYPE: &'static str = "thematicBreak";
}

/// Literal text.
///
/// Backslash escapes are resolved once, when the node is built; the content
/// can't be set any other way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct Text {
    content: String,
}

impl Text {
    pub const TYPE: &'static str = "text";

    /// Builds a text node from raw source, resolving backslash escapes.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            content: resolve_escapes(raw).into_owned(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
