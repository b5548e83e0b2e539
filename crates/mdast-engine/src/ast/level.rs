use serde::Serialize;

/// Errors raised when a node is built with data outside its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(usize),
}

/// A heading level in the range `1..=6`.
///
/// Construction is fallible so that an out-of-range level can never reach a
/// [`Heading`](super::Heading).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Level of a `=` underlined Setext heading.
    pub const H1: HeadingLevel = HeadingLevel(1);
    /// Level of a `-` underlined Setext heading.
    pub const H2: HeadingLevel = HeadingLevel(2);

    /// Returns the level as a plain integer.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<usize> for HeadingLevel {
    type Error = NodeError;

    fn try_from(level: usize) -> Result<Self, Self::Error> {
        match u8::try_from(level) {
            Ok(l) if (Self::MIN..=Self::MAX).contains(&l) => Ok(HeadingLevel(l)),
            _ => Err(NodeError::InvalidHeadingLevel(level)),
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = NodeError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::try_from(usize::from(level))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}
