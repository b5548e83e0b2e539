use std::sync::OnceLock;

use regex::Regex;

use crate::{
    ast::{Heading, HeadingLevel, Text},
    parsing::{blocks::Attempt, queue::LineQueue},
};

use super::BlankLine;

/// `=` underline: level 1. Up to three spaces or tabs of indentation and any
/// trailing spaces or tabs are allowed around the run.
const PRIMARY_UNDERLINE: &str = r"^[ \t]{0,3}=+[ \t]*$";
/// `-` underline: level 2.
const SECONDARY_UNDERLINE: &str = r"^[ \t]{0,3}-+[ \t]*$";

fn primary_underline() -> &'static Regex {
    static PRIMARY_REGEX: OnceLock<Regex> = OnceLock::new();
    PRIMARY_REGEX
        .get_or_init(|| Regex::new(PRIMARY_UNDERLINE).expect("Invalid setext underline regex"))
}

fn secondary_underline() -> &'static Regex {
    static SECONDARY_REGEX: OnceLock<Regex> = OnceLock::new();
    SECONDARY_REGEX
        .get_or_init(|| Regex::new(SECONDARY_UNDERLINE).expect("Invalid setext underline regex"))
}

/// Recognizes a Setext heading: one or more text lines closed by an
/// underline of `=` or `-`.
///
/// The queue is scanned without consuming anything. Lines are only removed
/// once the underline has been found, so a failed attempt leaves the queue as
/// it was.
#[derive(Debug, Clone)]
pub struct SetextHeading {
    primary: Regex,
    secondary: Regex,
}

enum Scan {
    Underline(Found),
    /// No underline reachable from any line before this index.
    StoppedAt(usize),
}

/// A Setext heading at the queue front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Found {
    level: HeadingLevel,
    /// Number of text lines before the underline.
    text_lines: usize,
}

impl SetextHeading {
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: primary_underline().clone(),
            secondary: secondary_underline().clone(),
        }
    }

    /// The level an underline line closes a heading at, if it is one.
    #[must_use]
    pub fn underline_level(&self, line: &str) -> Option<HeadingLevel> {
        if self.primary.is_match(line) {
            Some(HeadingLevel::H1)
        } else if self.secondary.is_match(line) {
            Some(HeadingLevel::H2)
        } else {
            None
        }
    }

    /// Looks for an underline below the front line.
    ///
    /// Returns what was found and how many lines were examined. A scan that
    /// stops at a blank line or the end of input leaves a limit on the queue,
    /// so later attempts starting before that point decline without looking.
    fn lookahead(&self, queue: &mut LineQueue) -> (Option<Found>, usize) {
        if queue.no_underline_before() > 0 {
            return (None, 0);
        }
        match self.scan(queue) {
            Scan::Underline(found) => (Some(found), found.text_lines + 1),
            Scan::StoppedAt(index) => {
                queue.mark_no_underline_before(index);
                (None, (index + 1).min(queue.len()))
            }
        }
    }

    fn scan(&self, queue: &LineQueue) -> Scan {
        for (i, line) in queue.iter().enumerate() {
            if BlankLine::is_blank(line) {
                return Scan::StoppedAt(i);
            }
            if let Some(level) = self.underline_level(line) {
                // An underline with nothing above it is not a heading.
                if i == 0 {
                    return Scan::StoppedAt(0);
                }
                return Scan::Underline(Found {
                    level,
                    text_lines: i,
                });
            }
        }
        Scan::StoppedAt(queue.len())
    }

    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        let (Some(found), _) = self.lookahead(queue) else {
            return Attempt::Declined;
        };

        let mut lines = queue.take_front(found.text_lines + 1);
        lines.pop(); // underline
        let text = Text::new(&lines.join("\n"));

        Attempt::Consumed(Some(Heading::with_level(found.level, Some(text)).into()))
    }
}

impl Default for SetextHeading {
    fn default() -> Self {
        Self::new()
    }
}
