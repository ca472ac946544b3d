use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from Merkle tree operations.
///
/// A proof that checks out `false` is reported as the normal `false`
/// result of verification, never as an error — callers must be able to
/// tell "proof rejected" apart from "verification could not run".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Tried to build a tree over zero leaves.
    #[error("cannot build a tree from an empty leaf sequence")]
    EmptyInput,
    /// Proof requested for an index outside the leaf sequence.
    #[error("index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves the tree was built over.
        leaf_count: usize,
    },
    /// A malformed value was presented (wrong width, bad encoding).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A proof failed structural validation or deserialization.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
    /// An error propagated from the root store.
    #[error("store error: {0}")]
    StoreError(String),
}
