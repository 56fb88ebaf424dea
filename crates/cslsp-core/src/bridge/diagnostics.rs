//! Diagnostic conversion from the analysis model to LSP.

use lsp_types::{Diagnostic, NumberOrString};

use super::position::quick_fix_to_range;
use super::severity::to_diagnostic_severity;
use crate::model::DiagnosticLocation;

/// Source tag attached to every published diagnostic.
///
/// Fixed for the single language this engine analyzes; never derived from
/// the input.
pub const DIAGNOSTIC_SOURCE: &str = "csharp";

/// Convert an engine diagnostic location to an LSP diagnostic.
///
/// Total over well-formed input: message and span are copied verbatim,
/// severity and code go through their respective mappers, and the source tag
/// is the fixed [`DIAGNOSTIC_SOURCE`] literal.
#[must_use]
pub fn to_diagnostic(location: &DiagnosticLocation) -> Diagnostic {
    Diagnostic {
        range: quick_fix_to_range(&location.location),
        severity: Some(to_diagnostic_severity(&location.log_level)),
        code: location.id.clone().map(NumberOrString::String),
        code_description: None,
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: location.location.text.clone(),
        related_information: None,
        tags: None,
        data: None,
    }
}
