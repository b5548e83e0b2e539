use std::sync::OnceLock;

use regex::Regex;

use crate::{
    ast::ThematicBreak as ThematicBreakNode,
    parsing::{blocks::Attempt, queue::LineQueue},
};

/// Up to three spaces or tabs of indentation, then three or more of the same
/// marker, each optionally followed by spaces or tabs.
const PATTERN: &str = r"^[ \t]{0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$";

fn pattern() -> &'static Regex {
    static THEMATIC_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    THEMATIC_BREAK_REGEX.get_or_init(|| Regex::new(PATTERN).expect("Invalid thematic break regex"))
}

/// Recognizes a thematic break line (`***`, `- - -`, `___`).
#[derive(Debug, Clone)]
pub struct ThematicBreak {
    line: Regex,
}

impl ThematicBreak {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: pattern().clone(),
        }
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.line.is_match(line)
    }

    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        match queue.front() {
            Some(line) if self.matches(line) => {
                queue.pop_front();
                Attempt::Consumed(Some(ThematicBreakNode::default().into()))
            }
            _ => Attempt::Declined,
        }
    }
}

impl Default for ThematicBreak {
    fn default() -> Self {
        Self::new()
    }
}
