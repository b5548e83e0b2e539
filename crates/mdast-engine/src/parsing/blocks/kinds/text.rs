use crate::{
    ast::Text,
    parsing::{blocks::Attempt, queue::LineQueue},
};

/// Turns the front line into a `Text` node.
///
/// This is the last link in the chain: it accepts any line, so the engine
/// always makes progress. Consecutive lines are not merged into paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFallback;

impl TextFallback {
    pub fn attempt(&self, queue: &mut LineQueue) -> Attempt {
        match queue.pop_front() {
            Some(line) => Attempt::Consumed(Some(Text::new(&line).into())),
            None => Attempt::Declined,
        }
    }
}
