//! Core data types for Merkle Min

use serde::{Deserialize, Serialize};
use std::fmt;

/// Digest produced by a hash strategy
///
/// Owned bytes rather than a fixed-size array: the hash strategy is
/// pluggable, so digest width is whatever the strategy produces (32 bytes
/// for the default SHA-256).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Create a Digest from raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Digest(bytes.into())
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest width in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the digest holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Create a Digest from a hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        Ok(Digest(hex::decode(hex)?))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(&self.0);
        write!(f, "Digest({})", &hex[..hex.len().min(8)])
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Digest(bytes)
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Digest(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Custom serialization to use hex strings instead of byte arrays
impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        Digest::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}
