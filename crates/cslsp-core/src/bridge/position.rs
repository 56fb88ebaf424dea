//! Position and range conversion between the analysis model and LSP.
//!
//! The engine hands out bare `(column, line)` tuples, column first; LSP
//! positions are `(line, character)`, line first. Every tuple-accepting
//! function below transposes the field order. This is deliberate and load
//! bearing: treating the two orders as synonyms silently swaps coordinates.
//!
//! No validation or clamping happens here. Out-of-range values pass through
//! unchanged; the caller owns their meaning.

use lsp_types::{Position, Range};

use crate::model::{Point, QuickFix, Span};

/// Convert a `(column, line)` tuple to an LSP position.
///
/// The tuple is column-first; the result is line-first.
#[must_use]
pub const fn to_position(location: (u32, u32)) -> Position {
    let (column, line) = location;
    Position {
        line,
        character: column,
    }
}

/// Convert a `(column, line)` tuple to a zero-width LSP range.
///
/// Start and end are the same position.
#[must_use]
pub const fn to_range(location: (u32, u32)) -> Range {
    Range {
        start: to_position(location),
        end: to_position(location),
    }
}

/// Convert a pair of `(column, line)` tuples to an LSP range.
#[must_use]
pub const fn pair_to_range(start: (u32, u32), end: (u32, u32)) -> Range {
    Range {
        start: to_position(start),
        end: to_position(end),
    }
}

/// Convert an engine [`Point`] to an LSP position.
#[must_use]
pub const fn point_to_position(point: Point) -> Position {
    Position {
        line: point.line,
        character: point.column,
    }
}

/// Convert an engine [`Span`] to an LSP range.
#[must_use]
pub const fn span_to_range(span: Span) -> Range {
    Range {
        start: point_to_position(span.start),
        end: point_to_position(span.end),
    }
}

/// Convert a [`QuickFix`] location span to an LSP range.
#[must_use]
pub const fn quick_fix_to_range(location: &QuickFix) -> Range {
    Range {
        start: Position {
            line: location.line,
            character: location.column,
        },
        end: Position {
            line: location.end_line,
            character: location.end_column,
        },
    }
}

/// Convert an LSP position back to an engine [`Point`].
#[must_use]
pub const fn from_position(position: Position) -> Point {
    Point {
        line: position.line,
        column: position.character,
    }
}

/// Convert an LSP range back to an engine [`Span`].
#[must_use]
pub const fn from_range(range: Range) -> Span {
    Span {
        start: from_position(range.start),
        end: from_position(range.end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position_transposes_column_and_line() {
        // Tuple is (column, line); the position must come out line-first.
        let position = to_position((3, 5));
        assert_eq!(position.line, 5);
        assert_eq!(position.character, 3);
    }

    #[test]
    fn test_to_range_is_zero_width() {
        let range = to_range((3, 5));
        assert_eq!(range.start, range.end);
        assert_eq!(range.start.line, 5);
        assert_eq!(range.start.character, 3);
    }

    #[test]
    fn test_pair_to_range() {
        let range = pair_to_range((2, 1), (5, 1));
        assert_eq!(range.start, Position { line: 1, character: 2 });
        assert_eq!(range.end, Position { line: 1, character: 5 });
    }

    #[test]
    fn test_point_to_position_keeps_field_names() {
        let position = point_to_position(Point { line: 7, column: 4 });
        assert_eq!(position.line, 7);
        assert_eq!(position.character, 4);
    }

    #[test]
    fn test_span_to_range() {
        let span = Span {
            start: Point { line: 1, column: 0 },
            end: Point { line: 2, column: 8 },
        };
        let range = span_to_range(span);
        assert_eq!(range.start, Position { line: 1, character: 0 });
        assert_eq!(range.end, Position { line: 2, character: 8 });
    }

    #[test]
    fn test_quick_fix_to_range() {
        let fix = QuickFix {
            file_name: "Program.cs".to_string(),
            line: 1,
            column: 2,
            end_line: 1,
            end_column: 5,
            text: "msg".to_string(),
        };
        let range = quick_fix_to_range(&fix);
        assert_eq!(range.start, Position { line: 1, character: 2 });
        assert_eq!(range.end, Position { line: 1, character: 5 });
    }

    #[test]
    fn test_position_round_trip() {
        let point = Point { line: 9, column: 13 };
        assert_eq!(from_position(point_to_position(point)), point);
    }

    #[test]
    fn test_range_round_trip() {
        let span = Span {
            start: Point { line: 0, column: 0 },
            end: Point { line: 4, column: 17 },
        };
        assert_eq!(from_range(span_to_range(span)), span);
    }

    #[test]
    fn test_no_clamping_of_large_values() {
        let position = to_position((u32::MAX, u32::MAX));
        assert_eq!(position.line, u32::MAX);
        assert_eq!(position.character, u32::MAX);
    }
}
