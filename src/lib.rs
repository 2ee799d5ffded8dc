//! Merkle Min - A merkle tree library over opaque content
//!
//! Merkle Min builds a binary hash tree over an ordered collection of opaque
//! content items, producing a single root digest that commits to the entire
//! collection. It supports verifying the whole tree's internal consistency,
//! verifying that a specific item is a member, and extracting a compact
//! inclusion proof (sibling digests + directions) for a member without
//! revealing the rest of the tree.
//!
//! # Core Features
//!
//! - **Opaque Content**: anything implementing [`Content`] (digest + equality)
//!   can be stored; the tree never inspects item bytes itself
//! - **Pluggable Hashing**: an injected [`HashStrategy`] (SHA-256 by default)
//!   combines child digests; digest order is always `left ++ right`
//! - **Duplicate Padding**: odd levels are balanced by duplicating the last
//!   real leaf, so every digest derives from real content
//! - **Inclusion Proofs**: [`MerklePath`] carries the sibling digests and
//!   directions needed to recompute the root from a single leaf
//!
//! # Example Usage
//!
//! ```rust
//! use merkle_min::{sha256, Content, Digest, MerkleTree, Result};
//!
//! #[derive(Clone, Debug)]
//! struct Record(String);
//!
//! impl Content for Record {
//!     fn calculate_hash(&self) -> Result<Digest> {
//!         Ok(sha256(self.0.as_bytes()))
//!     }
//!
//!     fn equals(&self, other: &Self) -> Result<bool> {
//!         Ok(self.0 == other.0)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let records = vec![Record("So".into()), Record("Much".into()),
//!                    Record("Content".into()), Record("Wow".into())];
//!
//! let tree = MerkleTree::new(&records)?;
//! assert!(tree.verify_tree()?);
//! assert!(tree.verify_content(&records[0])?);
//!
//! let path = tree.merkle_path(&records[0])?;
//! let leaf = records[0].calculate_hash()?;
//! assert_eq!(path.recompute_root(&leaf, tree.hash_strategy()), *tree.root_digest());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod proofs;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    content::Content,
    error::{MerkleError, Result},
    hash::{sha256, HashStrategy},
    types::Digest,
};

pub use proofs::path::{Direction, MerklePath};

pub use tree::merkle::MerkleTree;

/// Current version of Merkle Min
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
