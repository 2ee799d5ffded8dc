//! Error types for Merkle Min

use thiserror::Error;

/// Main error type for merkle tree operations
#[derive(Error, Debug)]
pub enum MerkleError {
    /// Tree construction errors
    #[error("cannot construct a merkle tree from empty contents")]
    EmptyContents,

    /// A content digest or hash strategy invocation failed
    #[error("hash computation failed: {reason}")]
    HashComputation { reason: String },

    /// A content equality check failed
    #[error("content comparison failed: {reason}")]
    Comparison { reason: String },

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Generic error for unexpected conditions
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MerkleError {
    /// Create a new hash computation error
    pub fn hash_computation(reason: impl Into<String>) -> Self {
        Self::HashComputation {
            reason: reason.into(),
        }
    }

    /// Create a new comparison error
    pub fn comparison(reason: impl Into<String>) -> Self {
        Self::Comparison {
            reason: reason.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for merkle tree operations
pub type Result<T> = std::result::Result<T, MerkleError>;
