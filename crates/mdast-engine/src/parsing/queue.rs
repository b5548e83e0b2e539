use std::collections::VecDeque;

use xi_rope::Rope;

use super::rope::source_lines;

/// The remaining source lines of a document, consumed from the front.
///
/// Recognizers look at the front of the queue and either leave it alone or
/// remove whole lines. A queue belongs to exactly one parse.
///
/// Besides the lines, a queue carries what Setext lookahead has already
/// learned: how many front lines are known to sit before any reachable
/// underline. That count only shrinks as lines are removed, and equality
/// ignores it.
#[derive(Debug, Clone, Default)]
pub struct LineQueue {
    lines: VecDeque<String>,
    no_underline_before: usize,
}

impl LineQueue {
    /// Splits `text` into lines (see [`source_lines`]).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_rope(&Rope::from(text))
    }

    #[must_use]
    pub fn from_rope(rope: &Rope) -> Self {
        source_lines(rope).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn front(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    /// Read-only view of the remaining lines, front first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn pop_front(&mut self) -> Option<String> {
        let line = self.lines.pop_front()?;
        self.consumed(1);
        Some(line)
    }

    /// Removes the first `count` lines in one step and returns them.
    ///
    /// # Panics
    /// Panics if `count` exceeds the number of remaining lines. Callers compute
    /// `count` from a scan of this same queue.
    pub fn take_front(&mut self, count: usize) -> Vec<String> {
        let taken: Vec<String> = self.lines.drain(..count).collect();
        self.consumed(count);
        taken
    }

    /// Like [`take_front`](Self::take_front), dropping the lines.
    pub fn discard(&mut self, count: usize) {
        self.lines.drain(..count);
        self.consumed(count);
    }

    /// Number of front lines from which no Setext underline can be reached.
    pub(crate) fn no_underline_before(&self) -> usize {
        self.no_underline_before
    }

    /// Records that a scan from the front stopped at `index` without an
    /// underline, so no start position before `index` can find one either.
    pub(crate) fn mark_no_underline_before(&mut self, index: usize) {
        self.no_underline_before = self.no_underline_before.max(index.min(self.lines.len()));
    }

    fn consumed(&mut self, count: usize) {
        self.no_underline_before = self.no_underline_before.saturating_sub(count);
    }
}

impl PartialEq for LineQueue {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl Eq for LineQueue {}

impl FromIterator<String> for LineQueue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
            no_underline_before: 0,
        }
    }
}

impl<'a> FromIterator<&'a str> for LineQueue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}
