//! Bottom-up merkle tree construction

use crate::core::{content::Content, error::*, hash::HashStrategy};
use crate::tree::node::{Node, NodeId};
use tracing::{debug, trace};

/// Fully-linked output of a build: the node arena, the root, and the leaf
/// index in input order (including any padding duplicate).
#[derive(Debug, Clone)]
pub(crate) struct BuiltTree<C> {
    pub nodes: Vec<Node<C>>,
    pub root: NodeId,
    pub leaves: Vec<NodeId>,
}

/// Build a fully-linked tree from an ordered content list.
///
/// Leaf digests are computed in input order; any digest failure aborts the
/// whole build. An odd leaf count is balanced by appending one synthetic
/// duplicate of the last real leaf, so every level pairs evenly.
pub(crate) fn build_with_content<C: Content>(
    contents: &[C],
    strategy: &HashStrategy,
) -> Result<BuiltTree<C>> {
    if contents.is_empty() {
        return Err(MerkleError::EmptyContents);
    }

    let mut nodes: Vec<Node<C>> = Vec::with_capacity(2 * contents.len() + 1);
    let mut leaves: Vec<NodeId> = Vec::with_capacity(contents.len() + 1);

    for content in contents {
        let hash = content.calculate_hash()?;
        let id = NodeId(nodes.len());
        nodes.push(Node::leaf(hash, content.clone()));
        leaves.push(id);
    }

    if leaves.len() % 2 == 1 {
        let last = &nodes[leaves[leaves.len() - 1].0];
        let dup = Node {
            hash: last.hash.clone(),
            parent: None,
            left: None,
            right: None,
            content: last.content.clone(),
            leaf: true,
            duplicate: true,
        };
        let id = NodeId(nodes.len());
        nodes.push(dup);
        leaves.push(id);
        trace!("padded odd leaf count with duplicate of last leaf");
    }

    let root = build_intermediate(&mut nodes, leaves.clone(), strategy);

    debug!(
        leaves = leaves.len(),
        nodes = nodes.len(),
        root = %nodes[root.0].hash,
        "built merkle tree"
    );

    Ok(BuiltTree {
        nodes,
        root,
        leaves,
    })
}

/// Pairwise-combine levels until a single root remains.
fn build_intermediate<C: Content>(
    nodes: &mut Vec<Node<C>>,
    mut level: Vec<NodeId>,
    strategy: &HashStrategy,
) -> NodeId {
    while level.len() > 1 {
        let mut next = Vec::with_capacity((level.len() + 1) / 2);

        let mut i = 0;
        while i < level.len() {
            let left = level[i];
            // A trailing unpaired node pairs with itself. After duplicate
            // padding this cannot occur at the leaf level, but it keeps the
            // combine step total for any intermediate width.
            let right = if i + 1 < level.len() { level[i + 1] } else { left };

            let hash = strategy.hash_pair(&nodes[left.0].hash, &nodes[right.0].hash);
            let id = NodeId(nodes.len());
            nodes.push(Node::internal(hash, left, right));
            nodes[left.0].parent = Some(id);
            nodes[right.0].parent = Some(id);

            next.push(id);
            i += 2;
        }

        trace!(width = next.len(), "combined level");
        level = next;
    }

    level[0]
}
