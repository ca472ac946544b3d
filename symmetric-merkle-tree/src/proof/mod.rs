//! Inclusion proofs: the sibling value at each layer, leaves-to-root.
//!
//! Because the pair hash is symmetric, a proof is a plain ordered list of
//! sibling values with no left/right markers; verification folds them into
//! the claimed leaf value in sequence. Proofs serialize with bincode for
//! transport to verifiers.

use bincode::{Decode, Encode};

use crate::{Error, Result, Value, tree::pair_layer};

mod tests;

/// Upper bound on sibling count accepted from untrusted bytes.
///
/// Proof length equals the tree depth, so 64 already covers more leaves
/// than a 64-bit index can address; anything longer cannot come from a
/// real tree.
const MAX_PROOF_DEPTH: usize = 64;

/// Decode size limit for proof bytes.
const MAX_PROOF_BYTES: usize = 64 * 1024;

/// An inclusion proof for one leaf of a symmetric Merkle tree.
///
/// Holds `ceil(log2(n))` sibling values for a tree of `n` leaves; the
/// proof for a single-leaf tree is empty. Verification needs only this
/// proof, the claimed value, and the trusted root — never the leaf
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    siblings: Vec<Value>,
}

impl MerkleProof {
    /// Wrap pre-collected sibling values as a proof, e.g. when received
    /// over a transport that already split them out.
    pub fn from_siblings(siblings: Vec<Value>) -> Self {
        MerkleProof { siblings }
    }

    /// Generate a proof for `leaves[index]` directly from the leaf
    /// sequence, keeping only one layer in memory at a time.
    ///
    /// At each layer: pad to even length, record the sibling (the element
    /// immediately before an odd position, immediately after an even
    /// one), halve the position, derive the next layer.
    ///
    /// Errors with [`Error::IndexOutOfRange`] unless
    /// `index < leaves.len()`; an empty sequence is [`Error::EmptyInput`].
    pub fn generate(leaves: &[Value], index: usize) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }
        if index >= leaves.len() {
            return Err(Error::IndexOutOfRange {
                index,
                leaf_count: leaves.len(),
            });
        }
        let mut siblings = Vec::new();
        let mut current = leaves.to_vec();
        let mut position = index;
        while current.len() > 1 {
            let next = pair_layer(&mut current);
            let sibling = if position % 2 == 0 {
                position + 1
            } else {
                position - 1
            };
            siblings.push(current[sibling]);
            position /= 2;
            current = next;
        }
        Ok(MerkleProof { siblings })
    }

    /// The ordered sibling values, leaves-to-root.
    pub fn siblings(&self) -> &[Value] {
        &self.siblings
    }

    /// Number of siblings, equal to the tree depth at generation time.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// `true` for the single-leaf proof, which carries no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| Error::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Fails closed: rejects trailing bytes and proofs longer than the
    /// maximum possible tree depth.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| Error::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(Error::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        if proof.siblings.len() > MAX_PROOF_DEPTH {
            return Err(Error::InvalidProof(format!(
                "proof has {} siblings (max {})",
                proof.siblings.len(),
                MAX_PROOF_DEPTH
            )));
        }
        Ok(proof)
    }
}
