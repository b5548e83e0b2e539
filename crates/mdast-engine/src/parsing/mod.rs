pub mod blocks;
pub mod queue;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::ast::Root;

use blocks::{Attempt, Recognizer, RecognizerKind, kinds::TextFallback};
use queue::LineQueue;

/// Drives an ordered chain of recognizers over a document.
///
/// The chain is fixed at construction. An engine holds no per-parse state, so
/// one instance can serve any number of parses, from any number of threads.
#[derive(Debug, Clone)]
pub struct Engine {
    recognizers: Vec<Recognizer>,
}

impl Engine {
    /// Builds an engine that tries `recognizers` in the given order.
    #[must_use]
    pub fn new(recognizers: Vec<Recognizer>) -> Self {
        Self { recognizers }
    }

    #[must_use]
    pub fn from_kinds(kinds: &[RecognizerKind]) -> Self {
        Self::new(kinds.iter().copied().map(Recognizer::from).collect())
    }

    /// The CommonMark block order: blank lines, thematic breaks, Setext
    /// headings, ATX headings, then text.
    #[must_use]
    pub fn commonmark() -> Self {
        Self::from_kinds(&RecognizerKind::COMMONMARK)
    }

    #[must_use]
    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    pub fn parse(&self, markdown: &str) -> Root {
        self.parse_rope(&Rope::from(markdown))
    }

    pub fn parse_rope(&self, rope: &Rope) -> Root {
        let mut queue = LineQueue::from_rope(rope);
        self.parse_queue(&mut queue)
    }

    /// Consumes `queue` until it is empty.
    ///
    /// Each pass offers the queue to the recognizers in order; the first one
    /// that consumes input wins the pass. If no recognizer consumes anything
    /// (a custom chain without a text stage), the front line becomes text so
    /// the loop always terminates.
    pub fn parse_queue(&self, queue: &mut LineQueue) -> Root {
        let mut root = Root::new();
        let lines = queue.len();
        let mut passes = 0usize;

        while !queue.is_empty() {
            let remaining = queue.len();
            passes += 1;

            let won = self.recognizers.iter().find_map(|r| match r.attempt(queue) {
                Attempt::Declined => None,
                Attempt::Consumed(node) => Some((r.kind(), node)),
            });

            let node = match won {
                Some((kind, node)) => {
                    log::trace!(
                        "{kind} consumed {} line(s)",
                        remaining - queue.len()
                    );
                    node
                }
                None => {
                    log::warn!("no recognizer matched {:?}; emitting text", queue.front());
                    match TextFallback.attempt(queue) {
                        Attempt::Consumed(node) => node,
                        Attempt::Declined => None,
                    }
                }
            };

            debug_assert!(queue.len() < remaining, "a pass must consume input");
            if let Some(node) = node {
                root.push(node);
            }
        }

        log::debug!(
            "parsed {lines} line(s) into {} node(s) in {passes} pass(es)",
            root.len()
        );
        root
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::commonmark()
    }
}

/// Parses `markdown` with the CommonMark block order.
pub fn parse(markdown: &str) -> Root {
    Engine::commonmark().parse(markdown)
}
