//! Backslash escapes for text content.
//!
//! Only the escape itself is resolved here: a backslash in front of ASCII
//! punctuation is dropped and the punctuation is kept as a literal. No other
//! inline syntax is interpreted.

use std::borrow::Cow;

/// The character that introduces an escape.
pub const ESCAPE: char = '\\';

/// Whether `c` may be backslash-escaped.
///
/// This is the CommonMark set of 32 ASCII punctuation characters, which is
/// exactly what [`char::is_ascii_punctuation`] accepts.
#[must_use]
pub fn is_escapable(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Resolves backslash escapes in `raw`.
///
/// - `\` + escapable punctuation: the backslash is removed.
/// - `\\`: both characters are kept and the pair is consumed together, so the
///   second backslash never escapes what follows it.
/// - `\` + anything else, or a trailing `\`: kept as written.
///
/// Input without a backslash is returned borrowed.
#[must_use]
pub fn resolve_escapes(raw: &str) -> Cow<'_, str> {
    if !raw.contains(ESCAPE) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(ESCAPE) => {
                out.push(ESCAPE);
                out.push(ESCAPE);
                chars.next();
            }
            Some(next) if is_escapable(next) => {
                out.push(next);
                chars.next();
            }
            _ => out.push(ESCAPE),
        }
    }

    Cow::Owned(out)
}
