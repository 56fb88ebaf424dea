//! Point and span types reported by the analysis engine.

use serde::{Deserialize, Serialize};

/// A single position in a document, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    /// Line number.
    pub line: u32,
    /// Column number.
    pub column: u32,
}

/// A contiguous region of a document between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Span {
    /// Start of the region, inclusive.
    pub start: Point,
    /// End of the region, exclusive.
    pub end: Point,
}
