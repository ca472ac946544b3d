//! Proof verification: a pure fold over the sibling values.
//!
//! Needs only the claimed value, the proof, and the trusted root — no
//! access to the leaf sequence. This is the one operation expected to run
//! in cost-constrained or adversarial environments.

use crate::{Value, hash::combine, proof::MerkleProof};

impl MerkleProof {
    /// Recompute the root implied by `value` and this proof's siblings:
    /// fold [`combine`] over them in layer order, starting from `value`.
    pub fn compute_root(&self, value: &Value) -> Value {
        self.siblings()
            .iter()
            .fold(*value, |acc, sibling| combine(&acc, sibling))
    }

    /// Check `value` against `expected_root`.
    ///
    /// A `false` result is the normal rejection outcome, not a fault.
    pub fn verify(&self, value: &Value, expected_root: &Value) -> bool {
        &self.compute_root(value) == expected_root
    }
}
