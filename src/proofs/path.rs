//! Merkle path extraction results

use crate::core::{error::*, hash::HashStrategy, types::Digest};
use serde::{Deserialize, Serialize};

/// Side on which a path sibling sits relative to the node being proven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Compact inclusion proof for one leaf
///
/// Sibling digests and direction flags, ordered leaf-to-root. The two
/// sequences always have equal length: the tree's height for a member,
/// zero for an item that is not in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePath {
    siblings: Vec<Digest>,
    directions: Vec<Direction>,
}

impl MerklePath {
    pub(crate) fn new(siblings: Vec<Digest>, directions: Vec<Direction>) -> Self {
        debug_assert_eq!(siblings.len(), directions.len());
        Self {
            siblings,
            directions,
        }
    }

    /// Sibling digests, leaf-to-root
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Direction flags, leaf-to-root
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Number of levels in the path
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the path is empty (item not found, or trivial tree)
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Fold the path back into a root digest, starting from a leaf digest.
    ///
    /// A path proves membership when the result equals the tree's trusted
    /// root digest.
    pub fn recompute_root(&self, leaf: &Digest, strategy: &HashStrategy) -> Digest {
        let mut acc = leaf.clone();
        for (sibling, direction) in self.siblings.iter().zip(&self.directions) {
            acc = match direction {
                Direction::Left => strategy.hash_pair(sibling, &acc),
                Direction::Right => strategy.hash_pair(&acc, sibling),
            };
        }
        acc
    }

    /// Serialize path to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MerkleError::JsonSerialization)
    }

    /// Deserialize path from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MerkleError::JsonSerialization)
    }
}
