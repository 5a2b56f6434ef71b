//! Error types for Merkle tree operations.

use thiserror::Error;

/// Result type for Merkle tree operations.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors that can occur during Merkle tree operations.
///
/// Verification is deliberately NOT represented here: `verify_proof` and
/// `verify_aggregated_proof` report failure as a boolean `false` so that
/// untrusted proofs never require error handling on the caller's side.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// An element index is at or beyond the number of committed elements.
    ///
    /// `len` is the element count fixed at construction time; padding
    /// slots are not independently addressable.
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of committed elements.
        len: usize,
    },

    /// A range proof was requested for an empty or inverted range.
    #[error("invalid range: start {start} >= end {end}")]
    InvalidRange {
        /// Start of the requested range (inclusive).
        start: usize,
        /// End of the requested range (exclusive).
        end: usize,
    },

    /// A serialized proof failed structural validation during decoding.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// A hash string could not be parsed into a digest.
    #[error("invalid hash: {0}")]
    InvalidHash(String),
}
