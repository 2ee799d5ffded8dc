//! Content contract for items stored in a merkle tree

use crate::core::{error::Result, types::Digest};

/// Capability contract every item stored in a tree must satisfy.
///
/// Implementations are supplied by the caller; the tree never inspects item
/// bytes itself. `calculate_hash` must be deterministic, and `equals` must be
/// total, reflexive, and symmetric. Membership is decided solely by `equals`;
/// a digest collision is never treated as membership.
pub trait Content: Clone {
    /// Compute the digest committing to this item's value
    fn calculate_hash(&self) -> Result<Digest>;

    /// Value equality used for membership lookups
    fn equals(&self, other: &Self) -> Result<bool>;
}
