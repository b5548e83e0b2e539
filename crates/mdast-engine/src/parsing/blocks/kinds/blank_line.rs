use crate::parsing::{blocks::Attempt, queue::LineQueue};

/// Absorbs blank lines between blocks.
///
/// A line is blank when it is empty or holds only whitespace. Blank lines
/// separate blocks but never produce a node.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLine;

impl BlankLine {
    #[must_use]
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        let count = queue.iter().take_while(|l| Self::is_blank(l)).count();
        if count == 0 {
            return Attempt::Declined;
        }
        queue.discard(count);
        Attempt::Consumed(None)
    }
}
