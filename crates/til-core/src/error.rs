//! Error types for the TIL front-end

use thiserror::Error;

/// Main error type for TIL operations
#[derive(Error, Debug)]
pub enum TilError {
    /// String is not a valid NEAR account id
    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    /// A write was attempted without a signed-in session
    #[error("Not signed in")]
    NotSignedIn,

    /// Post content exceeds the contract limit
    #[error("Content too long: {len} bytes (max {max})")]
    ContentTooLong { len: usize, max: usize },

    /// Requested page size exceeds the contract limit
    #[error("page_size cannot exceed {max} (requested {requested})")]
    PageSizeTooLarge { requested: u64, max: u64 },

    /// JSON-RPC level error returned by the node
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Contract call panicked or the transaction failed
    #[error("Contract error: {0}")]
    Contract(String),

    /// HTTP transport failed before a response was decoded
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binary (borsh) encoding failed
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::io::Error),

    /// Cryptographic operation failed
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Malformed key string
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Wallet login flow error
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Key store read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration value rejected
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using TilError
pub type TilResult<T> = Result<T, TilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TilError::InvalidAccountId("Bob".to_string());
        assert_eq!(format!("{}", err), "Invalid account id: Bob");

        let err = TilError::PageSizeTooLarge {
            requested: 101,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "page_size cannot exceed 100 (requested 101)"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let til_err: TilError = json_err.into();
        assert!(matches!(til_err, TilError::Serialization(_)));
    }
}
