//! Translation layer between the analysis model and the LSP wire model.
//!
//! Every function in this module is pure and synchronous. Unknown severities
//! and symbol kinds degrade to safe defaults rather than failing; only URI
//! construction is fallible.

mod diagnostics;
mod markdown;
mod position;
mod severity;
mod symbols;
mod uri;

pub use diagnostics::{to_diagnostic, DIAGNOSTIC_SOURCE};
pub use markdown::escape_markdown;
pub use position::{
    from_position, from_range, pair_to_range, point_to_position, quick_fix_to_range,
    span_to_range, to_position, to_range,
};
pub use severity::to_diagnostic_severity;
pub use symbols::to_symbol_kind;
pub use uri::{from_uri, to_uri};
