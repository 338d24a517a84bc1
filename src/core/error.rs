//! Error types for document creation and variant operations

use thiserror::Error;

/// Errors raised by factories and variant-specific operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A caller-supplied argument failed a basic check
    #[error("invalid {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl DocumentError {
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Reject empty or whitespace-only strings
pub fn require_non_blank(argument: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DocumentError::invalid(argument, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("name", "Report").is_ok());

        let err = require_non_blank("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }
}
