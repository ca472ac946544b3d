//! Bottom-up layered tree construction.

use crate::{
    Error, MerkleProof, Result, Value,
    hash::{EMPTY_VALUE, combine},
};

/// A materialized Merkle tree: all padded layers from leaves to root.
///
/// Layer 0 holds the leaves, padded to even length when the leaf count is
/// odd; each following layer pairs adjacent values with [`combine`] and
/// is itself padded before the next pairing. The final layer holds
/// exactly the root. Every layer except the root layer therefore has even
/// length, and layer k+1 is half (rounding up) the unpadded length of
/// layer k.
///
/// Building takes an immutable snapshot of the leaves; caller data is
/// never mutated. The root depends on leaf order — position is part of
/// the commitment even though each pairwise [`combine`] is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Value>>,
    leaf_count: usize,
}

impl MerkleTree {
    /// Build the full tree over `leaves`.
    ///
    /// Errors with [`Error::EmptyInput`] when `leaves` is empty. A
    /// single-leaf sequence is its own root (zero combine calls).
    pub fn build(leaves: &[Value]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }
        let leaf_count = leaves.len();
        let mut layers = Vec::new();
        let mut current = leaves.to_vec();
        while current.len() > 1 {
            let next = pair_layer(&mut current);
            layers.push(current);
            current = next;
        }
        layers.push(current);
        Ok(MerkleTree { layers, leaf_count })
    }

    /// The root commitment.
    pub fn root(&self) -> Value {
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of real (unpadded) leaves committed.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of non-root layers. Equals the sibling count of every proof
    /// this tree generates: `ceil(log2(leaf_count))`.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// The padded layer at `depth` (0 = leaves), or `None` past the root.
    pub fn layer(&self, depth: usize) -> Option<&[Value]> {
        self.layers.get(depth).map(Vec::as_slice)
    }

    /// Generate an inclusion proof for the leaf at `index`.
    ///
    /// Reads siblings off the materialized layers: at each layer the
    /// sibling is the element immediately before an odd position or
    /// immediately after an even one, and the position halves going up.
    /// Equivalent to [`MerkleProof::generate`] over the same leaf
    /// sequence.
    pub fn proof(&self, index: usize) -> Result<MerkleProof> {
        if index >= self.leaf_count {
            return Err(Error::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count,
            });
        }
        let mut siblings = Vec::with_capacity(self.depth());
        let mut position = index;
        for layer in &self.layers[..self.depth()] {
            let sibling = if position % 2 == 0 {
                position + 1
            } else {
                position - 1
            };
            siblings.push(layer[sibling]);
            position /= 2;
        }
        Ok(MerkleProof::from_siblings(siblings))
    }
}

/// Pad `layer` to even length with [`EMPTY_VALUE`], then pair adjacent
/// values into the next layer up.
pub(crate) fn pair_layer(layer: &mut Vec<Value>) -> Vec<Value> {
    if layer.len() % 2 != 0 {
        layer.push(EMPTY_VALUE);
    }
    layer
        .chunks(2)
        .map(|pair| combine(&pair[0], &pair[1]))
        .collect()
}

/// Compute the root without materializing intermediate layers.
///
/// Same commitment as [`MerkleTree::build`] + [`MerkleTree::root`], but
/// keeps only one layer in memory at a time.
pub fn build_root(leaves: &[Value]) -> Result<Value> {
    if leaves.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut current = leaves.to_vec();
    while current.len() > 1 {
        current = pair_layer(&mut current);
    }
    Ok(current[0])
}

/// Sibling count of a proof over `leaf_count` leaves: the tree depth,
/// `ceil(log2(leaf_count))`. Zero for a single leaf (and for zero leaves,
/// where no tree exists).
pub fn proof_len_for_leaf_count(leaf_count: usize) -> usize {
    let mut len = 0;
    let mut width = leaf_count;
    while width > 1 {
        width = width.div_ceil(2);
        len += 1;
    }
    len
}

/// Number of [`combine`] calls a full build over `leaf_count` leaves
/// makes: half the padded width of every non-root layer.
pub fn combine_calls_for_leaf_count(leaf_count: usize) -> usize {
    let mut calls = 0;
    let mut width = leaf_count;
    while width > 1 {
        width = width.div_ceil(2);
        calls += width;
    }
    calls
}
