//! Proof types: single-index inclusion proofs and compressed range proofs.
//!
//! Proofs are value objects copied out of the tree; they hold no reference
//! back to it. A proof is only meaningful against the root captured at
//! generation time — updating the tree afterwards makes older proofs fail
//! verification against the new root, which callers detect through the
//! explicit root comparison, not through any implicit invalidation.

use bincode::{Decode, Encode};

use crate::error::{MerkleTreeError, Result};
use crate::hash::MerkleHash;

/// Maximum number of levels accepted when decoding a proof. A depth of 64
/// already addresses more leaves than can exist in memory.
const MAX_PROOF_DEPTH: usize = 64;

/// Decode limit for serialized proofs (16 MiB).
const MAX_PROOF_BYTES: usize = 16 * 1024 * 1024;

/// An inclusion proof for a single element.
///
/// `siblings` holds the digest adjacent to the path node at each level in
/// leaf-to-root order; `directions[i]` is `true` when `siblings[i]` is the
/// LEFT child of the pair (i.e. the path node sits at an odd position) and
/// `false` when it is the right child. Both vectors have one entry per tree
/// level below the root.
///
/// Fields are `pub(crate)` so proofs can only be produced by
/// [`MerkleTree::get_proof`](crate::MerkleTree::get_proof) or decoded with
/// [`decode_from_slice`](InclusionProof::decode_from_slice).
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    /// Leaf commitment of the proved element.
    pub(crate) element_hash: MerkleHash,
    /// Sibling digests on the path, leaf to root.
    pub(crate) siblings: Vec<MerkleHash>,
    /// `true` = the sibling at the same index is the left child.
    pub(crate) directions: Vec<bool>,
}

impl InclusionProof {
    pub(crate) fn new(
        element_hash: MerkleHash,
        siblings: Vec<MerkleHash>,
        directions: Vec<bool>,
    ) -> Self {
        Self {
            element_hash,
            siblings,
            directions,
        }
    }

    /// Leaf commitment of the proved element.
    pub fn element_hash(&self) -> &MerkleHash {
        &self.element_hash
    }

    /// Sibling digests on the path from leaf to root.
    pub fn siblings(&self) -> &[MerkleHash] {
        &self.siblings
    }

    /// Direction flags; `true` means the sibling at the same index is the
    /// left child of its pair.
    pub fn directions(&self) -> &[bool] {
        &self.directions
    }

    /// Number of levels this proof spans (the tree height).
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::MalformedProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes, validating proof structure.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::MalformedProof(format!("decode error: {}", e)))?;
        if proof.siblings.len() != proof.directions.len() {
            return Err(MerkleTreeError::MalformedProof(format!(
                "{} siblings but {} directions",
                proof.siblings.len(),
                proof.directions.len()
            )));
        }
        if proof.siblings.len() > MAX_PROOF_DEPTH {
            return Err(MerkleTreeError::MalformedProof(format!(
                "proof depth {} exceeds maximum {}",
                proof.siblings.len(),
                MAX_PROOF_DEPTH
            )));
        }
        Ok(proof)
    }
}

/// The boundary digests a range proof supplies for one tree level.
///
/// At each level the queried leaves collapse to a contiguous span of
/// positions. `left` is the digest immediately before the span when the
/// span starts at an odd position, `right` the digest immediately after it
/// when the span ends at an even position. Nodes inside the span are never
/// carried — the verifier rederives them from the supplied elements.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BoundaryHashes {
    pub(crate) left: Option<MerkleHash>,
    pub(crate) right: Option<MerkleHash>,
}

impl BoundaryHashes {
    /// Digest of the left neighbor of the covered span, if the span's left
    /// edge is not aligned to a pair boundary.
    pub fn left(&self) -> Option<&MerkleHash> {
        self.left.as_ref()
    }

    /// Digest of the right neighbor of the covered span, if the span's
    /// right edge is not aligned to a pair boundary.
    pub fn right(&self) -> Option<&MerkleHash> {
        self.right.as_ref()
    }
}

/// A compressed inclusion proof for the contiguous element range
/// `[start, end)`.
///
/// Contains one [`BoundaryHashes`] entry per tree level below the root —
/// at most two digests per level regardless of the range length, which is
/// what makes it smaller than concatenating `end - start` single proofs.
/// The proved elements themselves travel outside the proof and are passed
/// to [`verify_aggregated_proof`](crate::verify_aggregated_proof) as plain
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct RangeProof {
    /// Start of the proved range (inclusive).
    pub(crate) start: u64,
    /// End of the proved range (exclusive).
    pub(crate) end: u64,
    /// Boundary digests, one entry per level, leaf level first.
    pub(crate) levels: Vec<BoundaryHashes>,
}

impl RangeProof {
    pub(crate) fn new(start: usize, end: usize, levels: Vec<BoundaryHashes>) -> Self {
        Self {
            start: start as u64,
            end: end as u64,
            levels,
        }
    }

    /// Start of the proved range (inclusive).
    pub fn start(&self) -> usize {
        self.start as usize
    }

    /// End of the proved range (exclusive).
    pub fn end(&self) -> usize {
        self.end as usize
    }

    /// Boundary digests per level, leaf level first.
    pub fn levels(&self) -> &[BoundaryHashes] {
        &self.levels
    }

    /// Number of levels this proof spans (the tree height).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total number of digests carried by this proof.
    ///
    /// Useful for comparing against the naive bound of
    /// `(end - start) * depth` sibling digests from individual proofs.
    pub fn boundary_hash_count(&self) -> usize {
        self.levels
            .iter()
            .map(|l| usize::from(l.left.is_some()) + usize::from(l.right.is_some()))
            .sum()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::MalformedProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes, validating proof structure.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_PROOF_BYTES>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::MalformedProof(format!("decode error: {}", e)))?;
        if proof.levels.len() > MAX_PROOF_DEPTH {
            return Err(MerkleTreeError::MalformedProof(format!(
                "proof depth {} exceeds maximum {}",
                proof.levels.len(),
                MAX_PROOF_DEPTH
            )));
        }
        if proof.start >= proof.end {
            return Err(MerkleTreeError::MalformedProof(format!(
                "empty range [{}, {})",
                proof.start, proof.end
            )));
        }
        if u128::from(proof.end) > 1u128 << proof.levels.len() {
            return Err(MerkleTreeError::MalformedProof(format!(
                "range end {} exceeds capacity for depth {}",
                proof.end,
                proof.levels.len()
            )));
        }
        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{MerkleHasher, Sha256Hasher};

    fn digest(label: &str) -> MerkleHash {
        Sha256Hasher.hash_leaf(label.as_bytes())
    }

    #[test]
    fn inclusion_proof_round_trips_through_bincode() {
        let proof = InclusionProof::new(
            digest("element"),
            vec![digest("s0"), digest("s1")],
            vec![false, true],
        );
        let bytes = proof.encode_to_vec().expect("encode");
        let decoded = InclusionProof::decode_from_slice(&bytes).expect("decode");
        assert_eq!(proof, decoded);
    }

    #[test]
    fn decode_rejects_mismatched_lengths() {
        let proof = InclusionProof::new(
            digest("element"),
            vec![digest("s0"), digest("s1")],
            vec![false],
        );
        let bytes = proof.encode_to_vec().expect("encode");
        let result = InclusionProof::decode_from_slice(&bytes);
        assert!(matches!(result, Err(MerkleTreeError::MalformedProof(_))));
    }

    #[test]
    fn range_decode_rejects_empty_range() {
        let proof = RangeProof::new(
            3,
            3,
            vec![BoundaryHashes {
                left: None,
                right: None,
            }],
        );
        let bytes = proof.encode_to_vec().expect("encode");
        let result = RangeProof::decode_from_slice(&bytes);
        assert!(matches!(result, Err(MerkleTreeError::MalformedProof(_))));
    }

    #[test]
    fn range_decode_rejects_end_beyond_capacity() {
        // Depth 1 → capacity 2, but the range claims to end at 3.
        let proof = RangeProof::new(
            0,
            3,
            vec![BoundaryHashes {
                left: None,
                right: None,
            }],
        );
        let bytes = proof.encode_to_vec().expect("encode");
        let result = RangeProof::decode_from_slice(&bytes);
        assert!(matches!(result, Err(MerkleTreeError::MalformedProof(_))));
    }
}
