//! Severity mapping from engine log levels to LSP diagnostic severities.

use lsp_types::DiagnosticSeverity;

use crate::model::AnalysisSeverity;

/// Map an engine severity name to an LSP diagnostic severity.
///
/// The engine stringifies its severity enum, so the four known names match
/// exactly and case-sensitively. Anything else degrades to INFORMATION;
/// unknown severities never fail a conversion.
#[must_use]
pub fn to_diagnostic_severity(log_level: &str) -> DiagnosticSeverity {
    match AnalysisSeverity::from_name(log_level) {
        Some(AnalysisSeverity::Error) => DiagnosticSeverity::ERROR,
        Some(AnalysisSeverity::Hidden) => DiagnosticSeverity::HINT,
        Some(AnalysisSeverity::Info) => DiagnosticSeverity::INFORMATION,
        Some(AnalysisSeverity::Warning) => DiagnosticSeverity::WARNING,
        None => {
            tracing::debug!(log_level, "unrecognized log level, reporting INFORMATION");
            DiagnosticSeverity::INFORMATION
        }
    }
}
