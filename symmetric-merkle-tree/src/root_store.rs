//! Trusted root storage boundary and the untrusted-caller verification
//! entry point.

use std::sync::RwLock;

use crate::{Error, MerkleProof, Result, Value};

/// Storage for the single trusted root commitment.
///
/// Uses `&self` (interior mutability) so a store can be shared behind
/// references. Implementations must make `get_root` and `set_root` atomic
/// with respect to each other: a read concurrent with a republish
/// observes the old or the new root, never a torn value.
///
/// Access control on `set_root` is the embedding system's concern — an
/// unrestricted setter defeats the integrity guarantee.
pub trait RootStore {
    /// The current trusted root, or `None` if none has been published.
    fn get_root(&self) -> Result<Option<Value>>;

    /// Publish a new trusted root, replacing any previous one.
    fn set_root(&self, root: Value) -> Result<()>;
}

/// In-memory root store backed by an `RwLock`.
///
/// Suitable for tests and single-process embeddings.
#[derive(Debug, Default)]
pub struct MemRootStore(RwLock<Option<Value>>);

impl MemRootStore {
    /// Create an empty store with no published root.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RootStore for MemRootStore {
    fn get_root(&self) -> Result<Option<Value>> {
        let guard = self
            .0
            .read()
            .map_err(|_| Error::StoreError("root lock poisoned".to_string()))?;
        Ok(*guard)
    }

    fn set_root(&self, root: Value) -> Result<()> {
        let mut guard = self
            .0
            .write()
            .map_err(|_| Error::StoreError("root lock poisoned".to_string()))?;
        *guard = Some(root);
        Ok(())
    }
}

/// Verify `value` against the trusted root held by `store`.
///
/// The integrity-checking surface for callers without access to the leaf
/// sequence: reads the trusted root, then folds the proof. Errors only
/// when no root can be read; a failed check is the `Ok(false)` outcome
/// and must be treated as "reject the data".
pub fn verify_with_store<S: RootStore>(
    value: &Value,
    proof: &MerkleProof,
    store: &S,
) -> Result<bool> {
    let root = store
        .get_root()?
        .ok_or_else(|| Error::StoreError("no trusted root has been published".to_string()))?;
    Ok(proof.verify(value, &root))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::MerkleTree;

    fn leaf(n: u8) -> Value {
        [n; 32]
    }

    #[test]
    fn test_mem_store_starts_empty() {
        let store = MemRootStore::new();
        assert_eq!(store.get_root().expect("get"), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemRootStore::new();
        store.set_root(leaf(7)).expect("set");
        assert_eq!(store.get_root().expect("get"), Some(leaf(7)));
    }

    #[test]
    fn test_republish_overwrites() {
        let store = MemRootStore::new();
        store.set_root(leaf(1)).expect("set");
        store.set_root(leaf(2)).expect("republish");
        assert_eq!(store.get_root().expect("get"), Some(leaf(2)));
    }

    #[test]
    fn test_verify_with_store_round_trip() {
        let leaves: Vec<Value> = (1u8..=6).map(leaf).collect();
        let tree = MerkleTree::build(&leaves).expect("build");
        let store = MemRootStore::new();
        store.set_root(tree.root()).expect("publish");

        let proof = tree.proof(3).expect("proof");
        assert!(verify_with_store(&leaves[3], &proof, &store).expect("verify"));
    }

    #[test]
    fn test_verify_with_store_rejects_wrong_value() {
        let leaves: Vec<Value> = (1u8..=6).map(leaf).collect();
        let tree = MerkleTree::build(&leaves).expect("build");
        let store = MemRootStore::new();
        store.set_root(tree.root()).expect("publish");

        let proof = tree.proof(3).expect("proof");
        assert!(!verify_with_store(&leaf(99), &proof, &store).expect("verify"));
    }

    #[test]
    fn test_verify_with_store_errors_without_root() {
        let leaves: Vec<Value> = (1u8..=4).map(leaf).collect();
        let tree = MerkleTree::build(&leaves).expect("build");
        let proof = tree.proof(0).expect("proof");

        let store = MemRootStore::new();
        assert_matches!(
            verify_with_store(&leaves[0], &proof, &store),
            Err(Error::StoreError(_))
        );
    }

    #[test]
    fn test_stale_proof_fails_after_republish() {
        let leaves: Vec<Value> = (1u8..=5).map(leaf).collect();
        let tree = MerkleTree::build(&leaves).expect("build");
        let store = MemRootStore::new();
        store.set_root(tree.root()).expect("publish");

        let proof = tree.proof(2).expect("proof");
        assert!(verify_with_store(&leaves[2], &proof, &store).expect("verify"));

        // Dataset changes: rebuild and republish. The old proof must stop
        // verifying against the new root.
        let mut changed = leaves.clone();
        changed[4] = leaf(42);
        let new_tree = MerkleTree::build(&changed).expect("rebuild");
        store.set_root(new_tree.root()).expect("republish");

        assert!(!verify_with_store(&leaves[2], &proof, &store).expect("verify"));
    }
}
