//! Internal analysis model consumed from the C# analysis engine.
//!
//! These are plain value types mirroring the engine's own wire shapes.
//! Positions are 0-based and already in the convention the LSP expects;
//! no re-basing happens anywhere in this crate.

mod diagnostics;
mod span;
pub mod symbols;

pub use diagnostics::{AnalysisSeverity, DiagnosticLocation, QuickFix};
pub use span::{Point, Span};
