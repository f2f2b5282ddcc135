//! Pull-based access to the lines of a text buffer.
//!
//! The buffer is split once, when the [LineReader] is created; afterwards the
//! reader only moves a cursor over the stored lines.

/// Delimiter used by [crate::string::StrExt::line_reader_default]
pub const DEFAULT_DELIMITER: &str = "\n";

/// A text buffer split into lines, with a cursor that can be rewound.
///
/// Splitting happens at every occurrence of the delimiter and does not skip
/// empty lines; a trailing delimiter produces a trailing empty line and an
/// empty buffer produces a single empty line.
///
/// # Examples
///
/// ```
/// use extkit_util::lines::LineReader;
///
/// let mut reader = LineReader::new("a\nb\nc", "\n");
/// assert_eq!(reader.next_line(), Some("a"));
/// assert_eq!(reader.next_line(), Some("b"));
/// assert_eq!(reader.next_line(), Some("c"));
/// assert_eq!(reader.next_line(), None);
///
/// reader.rewind();
/// assert_eq!(reader.next_line(), Some("a"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReader {
    lines: Vec<String>,
    cursor: usize,
}

impl LineReader {
    /// Split `text` at every occurrence of `delimiter`.
    ///
    /// An empty delimiter does not split at all; the whole text becomes a
    /// single line.
    pub fn new(text: &str, delimiter: &str) -> Self {
        let lines = match delimiter.is_empty() {
            true => vec![text.to_owned()],
            false => text.split(delimiter).map(str::to_owned).collect(),
        };
        Self { lines, cursor: 0 }
    }

    /// Return the line under the cursor and advance the cursor
    pub fn next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line.as_str())
    }

    /// Move the cursor back to the first line
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// All lines, regardless of the cursor position
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines the buffer was split into
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true for a reader built by [Self::new]; the split always yields a line
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the line [Self::next_line] will return next
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Iterating shares the cursor with [LineReader::next_line].
impl Iterator for LineReader {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().map(str::to_owned)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lines.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineReader {}
