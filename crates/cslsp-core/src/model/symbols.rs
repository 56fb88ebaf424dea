//! Symbol-kind identifiers reported by the analysis engine.
//!
//! The engine tags every code symbol with one of these lower-case strings.
//! The set is closed; anything outside it is treated as [`UNKNOWN`] by the
//! mapping in [`crate::bridge`].

/// A class declaration.
pub const CLASS: &str = "class";
/// A delegate declaration.
pub const DELEGATE: &str = "delegate";
/// An enum declaration.
pub const ENUM: &str = "enum";
/// An interface declaration.
pub const INTERFACE: &str = "interface";
/// A struct declaration.
pub const STRUCT: &str = "struct";
/// A constant field or local.
pub const CONSTANT: &str = "constant";
/// A destructor.
pub const DESTRUCTOR: &str = "destructor";
/// A member of an enum.
pub const ENUM_MEMBER: &str = "enummember";
/// An event declaration.
pub const EVENT: &str = "event";
/// A field declaration.
pub const FIELD: &str = "field";
/// An indexer declaration.
pub const INDEXER: &str = "indexer";
/// A method declaration.
pub const METHOD: &str = "method";
/// An operator declaration.
pub const OPERATOR: &str = "operator";
/// A property declaration.
pub const PROPERTY: &str = "property";
/// A namespace declaration.
pub const NAMESPACE: &str = "namespace";
/// A symbol the engine could not classify.
pub const UNKNOWN: &str = "unknown";

/// Every identifier the engine can report.
pub const ALL: &[&str] = &[
    CLASS, DELEGATE, ENUM, INTERFACE, STRUCT, CONSTANT, DESTRUCTOR, ENUM_MEMBER, EVENT, FIELD,
    INDEXER, METHOD, OPERATOR, PROPERTY, NAMESPACE, UNKNOWN,
];
