//! Merkle tree over an ordered collection of content items

use crate::core::{content::Content, error::*, hash::HashStrategy, types::Digest};
use crate::proofs::path::{Direction, MerklePath};
use crate::tree::builder::{self, BuiltTree};
use crate::tree::node::{self, Node, NodeId};
use std::fmt;
use tracing::debug;

/// A binary hash tree committing to an ordered collection of content items.
///
/// Built once from a content list; all later operations walk the static
/// structure. Reads take `&self` and are safe to run concurrently;
/// [`rebuild`](Self::rebuild) and [`rebuild_with`](Self::rebuild_with) take
/// `&mut self` and fully replace the structure rather than patching it.
#[derive(Debug, Clone)]
pub struct MerkleTree<C: Content> {
    nodes: Vec<Node<C>>,
    root: NodeId,
    leaves: Vec<NodeId>,
    /// Trusted reference copy of the root digest, captured at build time
    root_hash: Digest,
    hash_strategy: HashStrategy,
}

impl<C: Content> MerkleTree<C> {
    /// Build a tree from a content list using the default SHA-256 strategy
    pub fn new(contents: &[C]) -> Result<Self> {
        Self::with_hash_strategy(contents, HashStrategy::sha256())
    }

    /// Build a tree from a content list using a caller-supplied strategy
    pub fn with_hash_strategy(contents: &[C], hash_strategy: HashStrategy) -> Result<Self> {
        let built = builder::build_with_content(contents, &hash_strategy)?;
        Ok(Self::from_built(built, hash_strategy))
    }

    fn from_built(built: BuiltTree<C>, hash_strategy: HashStrategy) -> Self {
        let root_hash = built.nodes[built.root.0].hash.clone();
        Self {
            nodes: built.nodes,
            root: built.root,
            leaves: built.leaves,
            root_hash,
            hash_strategy,
        }
    }

    /// The cached root digest. O(1), no recomputation.
    pub fn root_digest(&self) -> &Digest {
        &self.root_hash
    }

    /// The tree's hash strategy
    pub fn hash_strategy(&self) -> &HashStrategy {
        &self.hash_strategy
    }

    /// Number of leaves, including any padding duplicate
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Leaves in input order, including any padding duplicate
    pub fn leaves(&self) -> impl Iterator<Item = &Node<C>> {
        self.leaves.iter().map(|id| &self.nodes[id.0])
    }

    /// Edge count from a leaf to the root
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.leaves[0];
        while let Some(parent) = self.nodes[current.0].parent {
            height += 1;
            current = parent;
        }
        height
    }

    /// Rebuild the tree from its current leaf contents, in their existing
    /// order. Used after leaf content is known to have changed out-of-band.
    pub fn rebuild(&mut self) -> Result<()> {
        let contents: Vec<C> = self
            .leaves
            .iter()
            .map(|id| self.nodes[id.0].content.clone())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| MerkleError::internal("leaf node missing content"))?;

        self.rebuild_with(&contents)
    }

    /// Rebuild the tree from a fresh content list, fully replacing the
    /// current leaves.
    pub fn rebuild_with(&mut self, contents: &[C]) -> Result<()> {
        // Construct the replacement completely before swapping anything in,
        // so a failed rebuild leaves the existing tree untouched.
        let built = builder::build_with_content(contents, &self.hash_strategy)?;

        self.root_hash = built.nodes[built.root.0].hash.clone();
        self.nodes = built.nodes;
        self.root = built.root;
        self.leaves = built.leaves;

        debug!(root = %self.root_hash, "rebuilt merkle tree");
        Ok(())
    }

    /// Verify the whole tree against the cached root digest.
    ///
    /// Recomputes every digest from raw content upward, ignoring cached
    /// values. `Ok(false)` means some stored digest is inconsistent with the
    /// content beneath it; it does not say where.
    pub fn verify_tree(&self) -> Result<bool> {
        let computed = node::recompute(&self.nodes, self.root, &self.hash_strategy)?;
        Ok(computed == self.root_hash)
    }

    /// Verify that `item` is a member of the tree.
    ///
    /// Scans the leaves with [`Content::equals`] (first match wins), then
    /// recomputes and checks every ancestor's digest up to the root.
    /// Returns `Ok(false)` if no leaf matches or any ancestor mismatches.
    pub fn verify_content(&self, item: &C) -> Result<bool> {
        let Some(leaf) = self.find_leaf(item)? else {
            return Ok(false);
        };

        let mut current = leaf;
        while let Some(parent) = self.nodes[current.0].parent {
            let parent_node = &self.nodes[parent.0];
            let (left, right) = node::children(parent_node)?;

            let left_hash = node::recompute(&self.nodes, left, &self.hash_strategy)?;
            let right_hash = node::recompute(&self.nodes, right, &self.hash_strategy)?;

            if self.hash_strategy.hash_pair(&left_hash, &right_hash) != parent_node.hash {
                return Ok(false);
            }

            current = parent;
        }

        Ok(true)
    }

    /// Extract the inclusion path for `item`: sibling digests and directions,
    /// ordered leaf-to-root.
    ///
    /// Returns an empty path if no leaf matches; callers distinguish "not
    /// found" from a trivial tree by also checking [`leaf_count`](Self::leaf_count).
    pub fn merkle_path(&self, item: &C) -> Result<MerklePath> {
        let Some(leaf) = self.find_leaf(item)? else {
            return Ok(MerklePath::default());
        };

        let mut siblings = Vec::new();
        let mut directions = Vec::new();

        let mut current = leaf;
        while let Some(parent) = self.nodes[current.0].parent {
            let (left, right) = node::children(&self.nodes[parent.0])?;

            // Which child the walk came up through is decided by node
            // identity, never by digest equality: duplicate leaves make
            // digest collisions between siblings routine.
            if left == current {
                siblings.push(self.nodes[right.0].hash.clone());
                directions.push(Direction::Right);
            } else {
                siblings.push(self.nodes[left.0].hash.clone());
                directions.push(Direction::Left);
            }

            current = parent;
        }

        Ok(MerklePath::new(siblings, directions))
    }

    /// First leaf satisfying `equals`, in insertion order.
    fn find_leaf(&self, item: &C) -> Result<Option<NodeId>> {
        for &id in &self.leaves {
            let content = self.nodes[id.0]
                .content
                .as_ref()
                .ok_or_else(|| MerkleError::internal("leaf node missing content"))?;

            if content.equals(item)? {
                return Ok(Some(id));
            }
        }

        Ok(None)
    }
}

impl<C: Content + fmt::Debug> fmt::Display for MerkleTree<C> {
    /// One line per leaf, in leaf order: leaf/duplicate flags, digest, and
    /// content representation. A diagnostic aid, not a wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leaf in self.leaves() {
            if let Some(content) = leaf.content() {
                writeln!(
                    f,
                    "{} {} {} {:?}",
                    leaf.is_leaf(),
                    leaf.is_duplicate(),
                    leaf.hash(),
                    content
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::sha256;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, PartialEq)]
    struct TestContent(&'static str);

    impl Content for TestContent {
        fn calculate_hash(&self) -> Result<Digest> {
            Ok(sha256(self.0.as_bytes()))
        }

        fn equals(&self, other: &Self) -> Result<bool> {
            Ok(self.0 == other.0)
        }
    }

    fn content(items: &[&'static str]) -> Vec<TestContent> {
        items.iter().map(|s| TestContent(s)).collect()
    }

    #[test]
    fn test_build_four_items() {
        let list = content(&["So", "Much", "Content", "Wow"]);
        let tree = MerkleTree::new(&list).unwrap();

        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.height(), 2);
        assert!(tree.verify_tree().unwrap());
    }

    #[test]
    fn test_root_digest_is_cached_pair_of_pairs() {
        let list = content(&["a", "b", "c", "d"]);
        let tree = MerkleTree::new(&list).unwrap();

        let strategy = HashStrategy::sha256();
        let h_ab = strategy.hash_pair(&sha256(b"a"), &sha256(b"b"));
        let h_cd = strategy.hash_pair(&sha256(b"c"), &sha256(b"d"));
        let expected = strategy.hash_pair(&h_ab, &h_cd);

        assert_eq!(*tree.root_digest(), expected);
    }

    #[test]
    fn test_tampered_content_detected() {
        let list = content(&["a", "b", "c", "d"]);
        let mut tree = MerkleTree::new(&list).unwrap();

        // Swapping a leaf's content changes what recomputation derives,
        // while every cached digest still reflects the original bytes.
        let victim = tree.leaves[1];
        tree.nodes[victim.0].content = Some(TestContent("evil"));

        assert!(!tree.verify_tree().unwrap());
        assert!(!tree.verify_content(&TestContent("evil")).unwrap());
    }

    #[test]
    fn test_tampered_internal_digest_detected() {
        let list = content(&["a", "b", "c", "d"]);
        let mut tree = MerkleTree::new(&list).unwrap();

        // Tampering an internal node's cached digest fails per-level
        // verification for every leaf underneath it.
        let victim = tree.leaves[1];
        let parent = tree.nodes[victim.0].parent.unwrap();
        tree.nodes[parent.0].hash = sha256(b"tampered internal");

        assert!(!tree.verify_content(&TestContent("a")).unwrap());
        assert!(!tree.verify_content(&TestContent("b")).unwrap());
        // The other subtree's chains never touch the tampered node.
        assert!(tree.verify_content(&TestContent("c")).unwrap());
        assert!(tree.verify_content(&TestContent("d")).unwrap());
    }

    #[test]
    fn test_tampered_leaf_cache_is_invisible_to_recomputation() {
        let list = content(&["a", "b", "c", "d"]);
        let mut tree = MerkleTree::new(&list).unwrap();

        // Recomputation ignores cached digests entirely, so a forged leaf
        // cache changes nothing the verifiers look at.
        let victim = tree.leaves[1];
        tree.nodes[victim.0].hash = sha256(b"forged");

        assert!(tree.verify_tree().unwrap());
        assert!(tree.verify_content(&TestContent("b")).unwrap());

        // Rebuild re-derives leaf digests from content, flushing the forgery.
        tree.rebuild().unwrap();
        assert_eq!(*tree.leaves().nth(1).unwrap().hash(), sha256(b"b"));
    }

    #[test]
    fn test_tampered_root_reference_detected() {
        let list = content(&["a", "b"]);
        let mut tree = MerkleTree::new(&list).unwrap();

        tree.root_hash = sha256(b"forged root");
        assert!(!tree.verify_tree().unwrap());
    }

    #[test]
    fn test_rebuild_recommits_to_changed_content() {
        let list = content(&["a", "b", "c", "d"]);
        let mut tree = MerkleTree::new(&list).unwrap();
        let original_root = tree.root_digest().clone();

        // Out-of-band content change: the cached digests no longer match
        // what recomputation derives.
        let victim = tree.leaves[0];
        tree.nodes[victim.0].content = Some(TestContent("changed"));
        assert!(!tree.verify_tree().unwrap());

        // Rebuild recommits to the current contents, change included.
        tree.rebuild().unwrap();
        assert!(tree.verify_tree().unwrap());
        assert_ne!(*tree.root_digest(), original_root);
        assert!(tree.verify_content(&TestContent("changed")).unwrap());
    }

    #[test]
    fn test_failed_rebuild_leaves_tree_untouched() {
        let list = content(&["a", "b"]);
        let mut tree = MerkleTree::new(&list).unwrap();
        let original_root = tree.root_digest().clone();

        let err = tree.rebuild_with(&[]).unwrap_err();
        assert!(matches!(err, MerkleError::EmptyContents));

        assert_eq!(*tree.root_digest(), original_root);
        assert_eq!(tree.leaf_count(), 2);
        assert!(tree.verify_tree().unwrap());
    }

    #[test]
    fn test_duplicate_leaf_flag() {
        let list = content(&["a", "b", "c"]);
        let tree = MerkleTree::new(&list).unwrap();

        let flags: Vec<bool> = tree.leaves().map(|l| l.is_duplicate()).collect();
        assert_eq!(flags, vec![false, false, false, true]);

        let last = tree.leaves().last().unwrap();
        assert_eq!(last.content(), Some(&TestContent("c")));
        assert_eq!(*last.hash(), sha256(b"c"));
    }

    #[test]
    fn test_display_one_line_per_leaf() {
        let list = content(&["a", "b", "c"]);
        let tree = MerkleTree::new(&list).unwrap();

        let rendered = tree.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("true false "));
        assert!(lines[3].starts_with("true true "));
        assert!(lines[3].ends_with("TestContent(\"c\")"));
    }

    #[test]
    fn test_single_item_tree() {
        let list = content(&["only"]);
        let tree = MerkleTree::new(&list).unwrap();

        // One real leaf plus its padding duplicate under a single root.
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.height(), 1);
        assert!(tree.verify_tree().unwrap());
        assert!(tree.verify_content(&TestContent("only")).unwrap());
    }
}
