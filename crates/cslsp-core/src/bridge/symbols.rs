//! Symbol-kind mapping from engine identifiers to LSP symbol kinds.

use std::collections::HashMap;
use std::sync::LazyLock;

use lsp_types::SymbolKind;

use crate::model::symbols;

/// Fixed mapping from engine symbol-kind identifiers to LSP symbol kinds.
///
/// Read-only after first use; safe for unsynchronized concurrent reads.
static KINDS: LazyLock<HashMap<&'static str, SymbolKind>> = LazyLock::new(|| {
    HashMap::from([
        (symbols::CLASS, SymbolKind::CLASS),
        (symbols::DELEGATE, SymbolKind::CLASS),
        (symbols::ENUM, SymbolKind::ENUM),
        (symbols::INTERFACE, SymbolKind::INTERFACE),
        (symbols::STRUCT, SymbolKind::STRUCT),
        (symbols::CONSTANT, SymbolKind::CONSTANT),
        (symbols::DESTRUCTOR, SymbolKind::METHOD),
        (symbols::ENUM_MEMBER, SymbolKind::ENUM_MEMBER),
        (symbols::EVENT, SymbolKind::EVENT),
        (symbols::FIELD, SymbolKind::FIELD),
        (symbols::INDEXER, SymbolKind::PROPERTY),
        (symbols::METHOD, SymbolKind::METHOD),
        (symbols::OPERATOR, SymbolKind::OPERATOR),
        (symbols::PROPERTY, SymbolKind::PROPERTY),
        (symbols::NAMESPACE, SymbolKind::NAMESPACE),
        (symbols::UNKNOWN, SymbolKind::CLASS),
    ])
});

/// Map an engine symbol-kind identifier to an LSP symbol kind.
///
/// Lookup is case-insensitive. Identifiers outside the fixed table map to
/// CLASS; an unmapped kind never fails a conversion.
#[must_use]
pub fn to_symbol_kind(kind: &str) -> SymbolKind {
    KINDS
        .get(kind.to_lowercase().as_str())
        .copied()
        .unwrap_or_else(|| {
            tracing::debug!(kind, "unrecognized symbol kind, reporting CLASS");
            SymbolKind::CLASS
        })
}
