//! # cslsp-core
//!
//! Core library for translating a C# code-analysis model into the Language
//! Server Protocol (LSP) wire model.
//!
//! The analysis engine reports diagnostics, source locations, and symbol
//! kinds in its own value types; editors speak the LSP wire format. This
//! crate is the mapping layer between the two: a set of pure, stateless
//! conversion functions. Every operation takes an immutable value and
//! returns a new immutable value, with no I/O and no shared mutable state.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`model`] - Internal analysis model types consumed from the engine
//! - [`bridge`] - Conversion functions from the analysis model to `lsp_types`
//! - [`error`] - Error types for the library
//!
//! ## Example
//!
//! ```rust
//! use cslsp_core::bridge;
//! use cslsp_core::model::{DiagnosticLocation, QuickFix};
//!
//! let location = DiagnosticLocation {
//!     location: QuickFix {
//!         file_name: "Program.cs".to_string(),
//!         line: 1,
//!         column: 2,
//!         end_line: 1,
//!         end_column: 5,
//!         text: "Unused variable".to_string(),
//!     },
//!     log_level: "Warning".to_string(),
//!     id: Some("CS0219".to_string()),
//! };
//!
//! let diagnostic = bridge::to_diagnostic(&location);
//! assert_eq!(diagnostic.source.as_deref(), Some("csharp"));
//! ```

pub mod bridge;
pub mod error;
pub mod model;

pub use error::{Error, Result};
