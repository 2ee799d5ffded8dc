//! Tree vertices and digest recomputation

use crate::core::{content::Content, error::*, hash::HashStrategy, types::Digest};

/// Index of a node within its tree's arena.
///
/// The tree owns every node in a flat arena; parent and child links are
/// indices into it. Two `NodeId`s are the same vertex exactly when they are
/// equal, which is what path extraction uses to decide which child the walk
/// came up through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single vertex of a merkle tree
///
/// Either a leaf wrapping one content item's digest, or an internal node
/// whose digest covers its two children. Children are exclusively owned by
/// their parent; the parent link is a non-owning index used for upward
/// traversal only.
#[derive(Debug, Clone)]
pub struct Node<C> {
    pub(crate) hash: Digest,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) content: Option<C>,
    pub(crate) leaf: bool,
    pub(crate) duplicate: bool,
}

impl<C> Node<C> {
    pub(crate) fn leaf(hash: Digest, content: C) -> Self {
        Self {
            hash,
            parent: None,
            left: None,
            right: None,
            content: Some(content),
            leaf: true,
            duplicate: false,
        }
    }

    pub(crate) fn internal(hash: Digest, left: NodeId, right: NodeId) -> Self {
        Self {
            hash,
            parent: None,
            left: Some(left),
            right: Some(right),
            content: None,
            leaf: false,
            duplicate: false,
        }
    }

    /// The node's cached digest
    pub fn hash(&self) -> &Digest {
        &self.hash
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Whether this node is a synthetic padding leaf
    pub fn is_duplicate(&self) -> bool {
        self.duplicate
    }

    /// The content item wrapped by this node (leaves only)
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }
}

/// Recompute a subtree's digest from raw content upward.
///
/// Ignores every cached digest beneath `id`: leaves re-derive their digest
/// from content, internal nodes re-hash their recomputed children. Detects
/// tampering anywhere in the subtree, including at internal nodes.
pub(crate) fn recompute<C: Content>(
    nodes: &[Node<C>],
    id: NodeId,
    strategy: &HashStrategy,
) -> Result<Digest> {
    let node = &nodes[id.0];

    if node.leaf {
        let content = node
            .content
            .as_ref()
            .ok_or_else(|| MerkleError::internal("leaf node missing content"))?;
        return content.calculate_hash();
    }

    let (left, right) = children(node)?;
    let left = recompute(nodes, left, strategy)?;
    let right = recompute(nodes, right, strategy)?;

    Ok(strategy.hash_pair(&left, &right))
}

/// Both child links of an internal node.
pub(crate) fn children<C>(node: &Node<C>) -> Result<(NodeId, NodeId)> {
    match (node.left, node.right) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(MerkleError::internal("internal node missing children")),
    }
}
