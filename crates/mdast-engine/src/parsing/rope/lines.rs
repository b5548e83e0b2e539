use xi_rope::Rope;

/// Returns an iterator over the lines of the rope, without terminators.
///
/// Lines end at `\n` or `\r\n`. A final line feed does not start an extra
/// empty line, but blank lines inside the document are kept as empty strings.
pub fn source_lines(rope: &Rope) -> impl Iterator<Item = String> + '_ {
    rope.lines(..).map(|line| line.into_owned())
}
