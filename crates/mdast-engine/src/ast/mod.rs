//! # MDAST Node Model
//!
//! The typed tree produced by the block parser.
//!
//! ## Modules
//!
//! - **`types`**: `Root`, `Node`, `Heading`, `ThematicBreak`, `Text`
//! - **`level`**: `HeadingLevel`, the `1..=6` newtype, and `NodeError`
//! - **`escape`**: backslash-escape resolution applied when `Text` is built
//!
//! ## Key Invariants
//!
//! - Heading levels are always within `1..=6`
//! - `Text` content has had escapes resolved exactly once
//! - Equality is structural, so whole trees can be compared in tests
//!
//! Serialized field names follow MDAST: `type`, `children`, `level`, `text`,
//! `content`. Absent optional fields are omitted.

pub mod escape;
pub mod level;
pub mod types;

pub use escape::resolve_escapes;
pub use level::{HeadingLevel, NodeError};
pub use types::{Heading, Node, Root, Text, ThematicBreak};
