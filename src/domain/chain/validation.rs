//! Chain validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for chain IDs
pub const MAX_CHAIN_ID_LENGTH: usize = 64;

/// Regex pattern for valid chain IDs (alphanumeric plus dots, underscores and
/// hyphens; must be usable as a URL path segment)
static CHAIN_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*$").unwrap());

/// Chain validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ChainValidationError {
    /// Chain ID is empty
    EmptyId,
    /// Chain ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Chain ID contains invalid characters
    InvalidIdFormat { id: String },
}

impl fmt::Display for ChainValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Chain ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Chain ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid chain ID format '{}': must be alphanumeric with dots, underscores or hyphens",
                    id
                )
            }
        }
    }
}

impl std::error::Error for ChainValidationError {}

/// Validate a chain ID
pub fn validate_chain_id(id: &str) -> Result<(), ChainValidationError> {
    if id.is_empty() {
        return Err(ChainValidationError::EmptyId);
    }

    if id.len() > MAX_CHAIN_ID_LENGTH {
        return Err(ChainValidationError::IdTooLong {
            length: id.len(),
            max: MAX_CHAIN_ID_LENGTH,
        });
    }

    if !CHAIN_ID_PATTERN.is_match(id) {
        return Err(ChainValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_chain_ids() {
        assert!(validate_chain_id("1").is_ok());
        assert!(validate_chain_id("137").is_ok());
        assert!(validate_chain_id("eip155-1").is_ok());
        assert!(validate_chain_id("solana-mainnet").is_ok());
        assert!(validate_chain_id("gnosis_chain").is_ok());
        assert!(validate_chain_id("v2.testnet").is_ok());
    }

    #[test]
    fn test_invalid_chain_ids() {
        // Empty
        assert!(matches!(
            validate_chain_id(""),
            Err(ChainValidationError::EmptyId)
        ));

        // Too long
        let long_id = "a".repeat(65);
        assert!(matches!(
            validate_chain_id(&long_id),
            Err(ChainValidationError::IdTooLong { .. })
        ));

        // Path separators and whitespace would break routing
        assert!(matches!(
            validate_chain_id("1/eth"),
            Err(ChainValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_chain_id("my chain"),
            Err(ChainValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_chain_id("-leading"),
            Err(ChainValidationError::InvalidIdFormat { .. })
        ));
    }

    #[test]
    fn test_max_length_chain_id() {
        let max_id = "a".repeat(64);
        assert!(validate_chain_id(&max_id).is_ok());
    }
}
