//! # Block Recognition
//!
//! A fixed chain of recognizers carves the line queue into block nodes.
//!
//! ## Recognizer Contract
//!
//! Each recognizer looks at the front of the [`LineQueue`] and returns an
//! [`Attempt`]:
//!
//! - `Declined`: nothing matched and the queue holds exactly the same lines
//! - `Consumed(node)`: one or more lines were removed from the front, and at
//!   most one node was produced
//!
//! ## Modules
//!
//! - **`kinds`**: one module per recognizer, each owning its own syntax rules
//!   (indentation limits, markers, closing sequences)
//!
//! ## Precedence
//!
//! The CommonMark preset runs BlankLine, ThematicBreak, SetextHeading,
//! AtxHeading, Text. The order matters: `---` under a text line is a Setext
//! underline only because the thematic break check looks at the *front* line,
//! and Text has to come last because it never declines.

pub mod kinds;

use serde::{Deserialize, Serialize};

use crate::ast::Node;

use super::queue::LineQueue;
use kinds::{AtxHeading, BlankLine, SetextHeading, TextFallback, ThematicBreak};

/// Outcome of offering the queue to a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Declined,
    Consumed(Option<Node>),
}

impl Attempt {
    #[must_use]
    pub fn is_declined(&self) -> bool {
        matches!(self, Attempt::Declined)
    }
}

/// Names a recognizer, for configuration files and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerKind {
    BlankLine,
    ThematicBreak,
    SetextHeading,
    AtxHeading,
    Text,
}

impl RecognizerKind {
    /// The CommonMark 0.30 block order.
    pub const COMMONMARK: [RecognizerKind; 5] = [
        RecognizerKind::BlankLine,
        RecognizerKind::ThematicBreak,
        RecognizerKind::SetextHeading,
        RecognizerKind::AtxHeading,
        RecognizerKind::Text,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RecognizerKind::BlankLine => "blank_line",
            RecognizerKind::ThematicBreak => "thematic_break",
            RecognizerKind::SetextHeading => "setext_heading",
            RecognizerKind::AtxHeading => "atx_heading",
            RecognizerKind::Text => "text",
        }
    }
}

impl std::fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A block recognizer together with any compiled state it needs.
#[derive(Debug, Clone)]
pub enum Recognizer {
    BlankLine(BlankLine),
    ThematicBreak(ThematicBreak),
    SetextHeading(SetextHeading),
    AtxHeading(AtxHeading),
    Text(TextFallback),
}

impl Recognizer {
    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        match self {
            Recognizer::BlankLine(r) => r.attempt(queue),
            Recognizer::ThematicBreak(r) => r.attempt(queue),
            Recognizer::SetextHeading(r) => r.attempt(queue),
            Recognizer::AtxHeading(r) => r.attempt(queue),
            Recognizer::Text(r) => r.attempt(queue),
        }
    }

    #[must_use]
    pub fn kind(&self) -> RecognizerKind {
        match self {
            Recognizer::BlankLine(_) => RecognizerKind::BlankLine,
            Recognizer::ThematicBreak(_) => RecognizerKind::ThematicBreak,
            Recognizer::SetextHeading(_) => RecognizerKind::SetextHeading,
            Recognizer::AtxHeading(_) => RecognizerKind::AtxHeading,
            Recognizer::Text(_) => RecognizerKind::Text,
        }
    }
}

impl From<RecognizerKind> for Recognizer {
    fn from(kind: RecognizerKind) -> Self {
        match kind {
            RecognizerKind::BlankLine => Recognizer::BlankLine(BlankLine),
            RecognizerKind::ThematicBreak => Recognizer::ThematicBreak(ThematicBreak::new()),
            RecognizerKind::SetextHeading => Recognizer::SetextHeading(SetextHeading::new()),
            RecognizerKind::AtxHeading => Recognizer::AtxHeading(AtxHeading),
            RecognizerKind::Text => Recognizer::Text(TextFallback),
        }
    }
}
