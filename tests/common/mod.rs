//! Shared content types for integration tests
#![allow(dead_code)]

use merkle_min::{sha256, Content, Digest, MerkleError, Result};

/// Plain string content hashed with SHA-256
#[derive(Clone, Debug, PartialEq)]
pub struct TestContent(pub String);

impl TestContent {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Content for TestContent {
    fn calculate_hash(&self) -> Result<Digest> {
        Ok(sha256(self.0.as_bytes()))
    }

    fn equals(&self, other: &Self) -> Result<bool> {
        Ok(self.0 == other.0)
    }
}

/// Build a content list from string literals
pub fn content(items: &[&str]) -> Vec<TestContent> {
    items.iter().map(|s| TestContent::new(s)).collect()
}

/// Content whose digest computation always fails
#[derive(Clone, Debug)]
pub struct FailingContent;

impl Content for FailingContent {
    fn calculate_hash(&self) -> Result<Digest> {
        Err(MerkleError::hash_computation("backing store unavailable"))
    }

    fn equals(&self, _other: &Self) -> Result<bool> {
        Ok(true)
    }
}

/// Content whose equality check always fails
#[derive(Clone, Debug)]
pub struct IncomparableContent(pub String);

impl Content for IncomparableContent {
    fn calculate_hash(&self) -> Result<Digest> {
        Ok(sha256(self.0.as_bytes()))
    }

    fn equals(&self, _other: &Self) -> Result<bool> {
        Err(MerkleError::comparison("incomparable content types"))
    }
}
