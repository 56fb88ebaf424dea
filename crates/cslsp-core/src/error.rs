//! Error types for cslsp-core.
//!
//! Almost every conversion in this crate is total: unknown severities and
//! symbol kinds degrade to defaults instead of failing. URI construction is
//! the one operation that can reject its input.

/// The main error type for cslsp-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A URI could not be constructed from the given string.
    #[error("invalid URI: {0}")]
    InvalidUri(String),
}

/// A specialized Result type for cslsp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_uri() {
        let err = Error::InvalidUri("file://bad path".to_string());
        assert_eq!(err.to_string(), "invalid URI: file://bad path");
    }

    #[test]
    fn test_result_type_alias() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }
}
