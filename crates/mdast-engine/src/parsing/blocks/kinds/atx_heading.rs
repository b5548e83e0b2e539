use crate::{
    ast::{Heading, HeadingLevel, Text},
    parsing::{blocks::Attempt, queue::LineQueue},
};

/// Recognizes an ATX heading line (`## Title`, `# Title #`).
///
/// Rules, from CommonMark 0.30 §4.2:
///
/// - up to three spaces or tabs of indentation
/// - an opening run of 1 to 6 unescaped `#`; its length is the level
/// - the opening run is followed by a space, a tab or the end of the line
/// - an optional closing run of `#` preceded by a space or tab, followed only
///   by spaces or tabs
/// - the content between is trimmed of spaces and tabs
#[derive(Debug, Clone, Copy, Default)]
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_INDENT: usize = 3;

    /// Splits an ATX heading line into its level and raw (still escaped)
    /// content. Returns `None` when the line is not an ATX heading.
    #[must_use]
    pub fn split(line: &str) -> Option<(HeadingLevel, &str)> {
        let bytes = line.as_bytes();

        let indent = bytes.iter().take_while(|&&b| is_space_or_tab(b)).count();
        if indent > Self::MAX_INDENT {
            return None;
        }

        let rest = &line[indent..];
        let hashes = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 {
            return None;
        }
        let level = HeadingLevel::try_from(hashes).ok()?;

        let after = &rest[hashes..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }

        let content = strip_closing_sequence(after).trim_matches(SPACE_OR_TAB);
        Some((level, content))
    }

    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        let Some((level, content)) = queue.front().and_then(Self::split) else {
            return Attempt::Declined;
        };
        let heading = Heading::with_level(level, Some(Text::new(content)));

        queue.pop_front();
        Attempt::Consumed(Some(heading.into()))
    }
}

const SPACE_OR_TAB: [char; 2] = [' ', '\t'];

fn is_space_or_tab(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Drops a trailing `#` run (and the spaces or tabs after it) when the run is
/// preceded by a space or tab. A run glued to other text, including an escaping
/// backslash, stays part of the content.
fn strip_closing_sequence(s: &str) -> &str {
    let trimmed = s.trim_end_matches(SPACE_OR_TAB);
    let without_run = trimmed.trim_end_matches(char::from(AtxHeading::MARKER));

    if without_run.len() == trimmed.len() {
        return trimmed;
    }
    if without_run.is_empty() || without_run.ends_with(SPACE_OR_TAB) {
        return without_run;
    }
    trimmed
}
