use serde::Serialize;

/// Position in a text file (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Byte span in a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.byte_end - self.byte_start
    }

    pub fn is_empty(&self) -> bool {
        self.byte_end == self.byte_start
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span {
            byte_start: range.start,
            byte_end: range.end,
        }
    }
}

/// Convert a byte offset to line and column position
///
/// Offsets past the end are clamped to the end of the content. Lines are
/// split on `\n` only, so a `\r` counts as a column.
pub fn byte_to_position(content: &str, byte_offset: usize) -> Position {
    let offset = byte_offset.min(content.len());
    let prefix = &content.as_bytes()[..offset];

    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    Position {
        line,
        column: offset - line_start + 1,
    }
}

/// Convert a byte span to start and end positions
pub fn span_to_positions(content: &str, span: Span) -> (Position, Position) {
    let start = byte_to_position(content, span.byte_start);
    let end = byte_to_position(content, span.byte_end);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_start() {
        let pos = byte_to_position("Hello\nWorld", 0);

        assert_eq!(pos, Position { line: 1, column: 1 });
    }

    #[test]
    fn test_byte_to_position_after_newline() {
        // H=0, e=1, l=2, l=3, o=4, \n=5, W=6
        let pos = byte_to_position("Hello\nWorld", 6);

        assert_eq!(pos, Position { line: 2, column: 1 });
    }

    #[test]
    fn test_byte_to_position_on_newline() {
        let pos = byte_to_position("Hello\nWorld", 5);

        assert_eq!(pos, Position { line: 1, column: 6 });
    }

    #[test]
    fn test_byte_to_position_past_end() {
        let pos = byte_to_position("A\nB\n", 99);

        assert_eq!(pos, Position { line: 3, column: 1 });
    }

    #[test]
    fn test_byte_to_position_multibyte_column_counts_bytes() {
        // "导" is three bytes
        let pos = byte_to_position("导出\nx", 3);

        assert_eq!(pos, Position { line: 1, column: 4 });
    }

    #[test]
    fn test_span_to_positions() {
        let content = "A\n<<<BLOCK>>>\nB\n";
        let span = Span::from(2..14);

        let (start, end) = span_to_positions(content, span);

        assert_eq!(start, Position { line: 2, column: 1 });
        assert_eq!(end, Position { line: 3, column: 1 });
        assert_eq!(span.len(), 12);
    }
}
