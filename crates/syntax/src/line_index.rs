//! Conversion between byte offsets and editor positions.

use graphql_types::Position;

/// Line index for a document (for position conversions).
///
/// Maps byte offsets to line/column positions and back. Columns are UTF-16
/// code units, matching what the host editor reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: String,
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new line index from source text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];

        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            text: text.to_string(),
            line_starts,
        }
    }

    /// Get the number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset of the start of a line
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte offset one past the last character of `line`, excluding the
    /// line terminator (`\n` or `\r\n`).
    fn line_end(&self, line: usize) -> usize {
        let Some(&next) = self.line_starts.get(line + 1) else {
            return self.text.len();
        };
        let newline = next - 1;
        if self.text[..newline].ends_with('\r') {
            newline - 1
        } else {
            newline
        }
    }

    /// Convert an editor position to a byte offset.
    ///
    /// Returns `None` for a line past the end of the document, for a column
    /// past the end of its line, and for a column that splits a surrogate
    /// pair.
    #[must_use]
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let start = self.line_start(line)?;
        let end = self.line_end(line);
        let wanted = position.character as usize;

        let mut units = 0;
        for (i, c) in self.text[start..end].char_indices() {
            if units == wanted {
                return Some(start + i);
            }
            if units > wanted {
                return None;
            }
            units += c.len_utf16();
        }

        (units == wanted).then_some(end)
    }

    /// Convert a byte offset to an editor position.
    ///
    /// Offsets past the end of the text clamp to the end; an offset inside a
    /// multi-byte character maps to the start of that character.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));
        let start = self.line_starts[line];

        let character: usize = self.text[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < offset)
            .map(|(_, c)| c.len_utf16())
            .sum();

        Position::new(line as u32, character as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_new() {
        let index = LineIndex::new("line 1\nline 2\nline 3");

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(7));
        assert_eq!(index.line_start(2), Some(14));
        assert_eq!(index.line_start(3), None);
    }

    #[test]
    fn test_offset_ascii() {
        let index = LineIndex::new("query {\n  user\n}");
        assert_eq!(index.offset(Position::new(0, 0)), Some(0));
        assert_eq!(index.offset(Position::new(1, 2)), Some(10));
        assert_eq!(index.offset(Position::new(2, 0)), Some(15));
    }

    #[test]
    fn test_offset_end_of_line_is_valid() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.offset(Position::new(0, 2)), Some(2));
        assert_eq!(index.offset(Position::new(1, 2)), Some(5));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.offset(Position::new(0, 3)), None);
        assert_eq!(index.offset(Position::new(5, 0)), None);
    }

    #[test]
    fn test_offset_excludes_crlf_terminator() {
        let index = LineIndex::new("ab\r\ncd");
        assert_eq!(index.offset(Position::new(0, 2)), Some(2));
        assert_eq!(index.offset(Position::new(0, 3)), None);
        assert_eq!(index.offset(Position::new(1, 0)), Some(4));
        assert_eq!(index.offset(Position::new(1, 2)), Some(6));
    }

    #[test]
    fn test_offset_counts_utf16_units() {
        // "é" is 2 bytes / 1 unit, "😀" is 4 bytes / 2 units
        let text = "# é😀\n{ a }";
        let index = LineIndex::new(text);
        assert_eq!(index.offset(Position::new(0, 3)), Some(4));
        assert_eq!(index.offset(Position::new(0, 5)), Some(8));
        assert_eq!(index.offset(Position::new(0, 4)), None);
        assert_eq!(index.offset(Position::new(1, 2)), Some(11));
    }

    #[test]
    fn test_position_round_trip_for_multibyte_line() {
        let text = "# é😀\n{ a }";
        let index = LineIndex::new(text);
        assert_eq!(index.position(8), Position::new(0, 5));
        assert_eq!(index.position(11), Position::new(1, 2));
    }

    #[test]
    fn test_position_clamps_past_end() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.position(100), Position::new(1, 2));
    }

    #[test]
    fn test_empty_text() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.offset(Position::new(0, 0)), Some(0));
        assert_eq!(index.position(0), Position::new(0, 0));
    }
}
