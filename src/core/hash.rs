//! Hash utilities for Merkle Min

use crate::core::types::Digest;
use digest::DynDigest;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::sync::Arc;

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    sha2::Digest::update(&mut hasher, data);
    Digest::from_bytes(hasher.finalize().to_vec())
}

/// Pluggable hash strategy
///
/// A factory producing a fresh hashing accumulator per invocation, held by a
/// tree for its lifetime. The accumulator is stateless between invocations;
/// internal-node digests are always computed over `left ++ right`.
#[derive(Clone)]
pub struct HashStrategy {
    factory: Arc<dyn Fn() -> Box<dyn DynDigest> + Send + Sync>,
}

impl HashStrategy {
    /// Create a strategy from an accumulator factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Box<dyn DynDigest> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// The default strategy: SHA-256
    pub fn sha256() -> Self {
        Self::new(|| Box::new(Sha256::new()))
    }

    /// Produce a fresh accumulator
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        (self.factory)()
    }

    /// Hash arbitrary bytes with a fresh accumulator
    pub fn hash_bytes(&self, data: &[u8]) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(data);
        Digest::from_bytes(hasher.finalize().into_vec())
    }

    /// Hash the concatenation of two digests (for merkle tree construction)
    pub fn hash_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_bytes(hasher.finalize().into_vec())
    }
}

impl Default for HashStrategy {
    fn default() -> Self {
        Self::sha256()
    }
}

impl fmt::Debug for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashStrategy").finish_non_exhaustive()
    }
}
