//! # mdast-engine
//!
//! Parses Markdown into an MDAST-style tree of block nodes.
//!
//! ```text
//! Source Text → Lines → LineQueue → Recognizer chain → Root
//!               (Rope)              (blank, break, setext, atx, text)
//! ```
//!
//! The document is split into lines and fed to a fixed chain of recognizers.
//! On every pass the first recognizer that consumes lines from the front of
//! the queue wins; any node it yields is appended to the root. The final
//! recognizer turns any line into text, so parsing never fails.
//!
//! ## Quick Start
//!
//! ```
//! use mdast_engine::{parse, Heading, Node, Text};
//!
//! let root = parse("## Hello\n");
//! assert_eq!(
//!     root.children(),
//!     &[Node::from(Heading::new(2, Some(Text::new("Hello"))).unwrap())]
//! );
//! ```
//!
//! Only block structure is recognized (headings, thematic breaks, text
//! lines). Inline markup is left as literal text apart from backslash escapes.

pub mod ast;
pub mod parsing;

pub use ast::{Heading, HeadingLevel, Node, NodeError, Root, Text, ThematicBreak};
pub use parsing::{
    Engine,
    blocks::{Attempt, Recognizer, RecognizerKind},
    parse,
    queue::LineQueue,
};
