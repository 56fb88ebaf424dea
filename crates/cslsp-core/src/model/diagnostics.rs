//! Diagnostic location types reported by the analysis engine.

use serde::{Deserialize, Serialize};

/// A source location with a span and descriptive text.
///
/// The engine reports these for quick fixes and diagnostics alike. Field
/// names follow the engine's PascalCase JSON payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuickFix {
    /// Path of the file the location points into.
    pub file_name: String,
    /// Start line, 0-based.
    pub line: u32,
    /// Start column, 0-based.
    pub column: u32,
    /// End line, 0-based.
    pub end_line: u32,
    /// End column, 0-based.
    pub end_column: u32,
    /// Human-readable message for the location.
    pub text: String,
}

/// A diagnostic reported by the analysis engine: a location plus severity
/// and an optional diagnostic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnosticLocation {
    /// The span and message of the diagnostic.
    #[serde(flatten)]
    pub location: QuickFix,
    /// Severity name as the engine stringifies it ("Error", "Hidden",
    /// "Info", "Warning").
    pub log_level: String,
    /// Diagnostic id such as "CS0219", when the engine assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Severity levels the analysis engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSeverity {
    /// A reported error.
    Error,
    /// Not surfaced in normal output; shown as a hint to editors.
    Hidden,
    /// Informational finding.
    Info,
    /// A reported warning.
    Warning,
}

impl AnalysisSeverity {
    /// Parse an engine severity name.
    ///
    /// The match is exact and case-sensitive, since the engine stringifies
    /// its severity enum verbatim. Anything else returns `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Error" => Some(Self::Error),
            "Hidden" => Some(Self::Hidden),
            "Info" => Some(Self::Info),
            "Warning" => Some(Self::Warning),
            _ => None,
        }
    }
}
