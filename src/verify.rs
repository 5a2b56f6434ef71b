//! Pure proof verification — no tree or storage required.
//!
//! Verification is usable by untrusted callers: it never panics and never
//! returns an error. Any structural mismatch in a proof yields `false`,
//! exactly like a wrong digest would.

use crate::hash::{MerkleHash, MerkleHasher, Sha256Hasher};
use crate::proof::{InclusionProof, RangeProof};

impl InclusionProof {
    /// Verify this proof against `root` using the canonical SHA-256 scheme.
    pub fn verify(&self, root: &MerkleHash) -> bool {
        self.verify_with(root, &Sha256Hasher)
    }

    /// Verify this proof against `root` with an explicit hashing strategy.
    ///
    /// Folds the element commitment upward: at each step the sibling goes
    /// on the left when its direction flag is `true`, on the right
    /// otherwise. Returns `true` iff the final digest equals `root`.
    /// A siblings/directions length mismatch is reported as `false`.
    pub fn verify_with<H: MerkleHasher>(&self, root: &MerkleHash, hasher: &H) -> bool {
        if self.siblings.len() != self.directions.len() {
            return false;
        }

        let mut current = self.element_hash;
        for (sibling, sibling_is_left) in self.siblings.iter().zip(&self.directions) {
            current = if *sibling_is_left {
                hasher.hash_node(sibling, &current)
            } else {
                hasher.hash_node(&current, sibling)
            };
        }
        current == *root
    }
}

impl RangeProof {
    /// Verify this proof against `root` using the canonical SHA-256 scheme.
    ///
    /// `elements` are the claimed plain values at positions
    /// `[start, end)`, in tree order.
    pub fn verify<T: AsRef<[u8]>>(
        &self,
        root: &MerkleHash,
        elements: &[T],
        start: usize,
        end: usize,
    ) -> bool {
        self.verify_with(root, elements, start, end, &Sha256Hasher)
    }

    /// Verify this proof against `root` with an explicit hashing strategy.
    ///
    /// Hashes the supplied elements into the covered span at the leaf
    /// level, then folds level by level: the span's alignment at each
    /// level dictates whether a left and/or right boundary digest must be
    /// present, and any disagreement with what the proof supplies is
    /// rejected. After all levels the span has collapsed to a single
    /// candidate root, which is compared to `root`.
    pub fn verify_with<T: AsRef<[u8]>, H: MerkleHasher>(
        &self,
        root: &MerkleHash,
        elements: &[T],
        start: usize,
        end: usize,
        hasher: &H,
    ) -> bool {
        if start >= end || end - start != elements.len() {
            return false;
        }
        if self.start() != start || self.end() != end {
            return false;
        }
        let height = self.levels.len();
        if height >= usize::BITS as usize || end > 1usize << height {
            return false;
        }

        let mut row: Vec<MerkleHash> = elements
            .iter()
            .map(|e| hasher.hash_leaf(e.as_ref()))
            .collect();
        let mut cs = start;
        let mut ce = end - 1;
        for boundary in &self.levels {
            // The span must carry a left neighbor exactly when it starts at
            // an odd position, and a right neighbor exactly when it ends at
            // an even one.
            if boundary.left.is_some() != (cs % 2 == 1)
                || boundary.right.is_some() != (ce % 2 == 0)
            {
                return false;
            }
            if let Some(left) = boundary.left {
                row.insert(0, left);
            }
            if let Some(right) = boundary.right {
                row.push(right);
            }
            if row.len() % 2 != 0 {
                return false;
            }
            row = row
                .chunks_exact(2)
                .map(|pair| hasher.hash_node(&pair[0], &pair[1]))
                .collect();
            cs /= 2;
            ce /= 2;
        }

        row.len() == 1 && row[0] == *root
    }
}

/// Verify a single-element inclusion proof against a known root.
///
/// Pure function of its inputs; returns `false` for malformed proofs
/// instead of erroring. Uses the canonical SHA-256 scheme.
pub fn verify_proof(root: &MerkleHash, proof: &InclusionProof) -> bool {
    proof.verify(root)
}

/// Verify a compressed range proof against a known root.
///
/// `elements` are the claimed plain values at positions `[start, end)` in
/// tree order; their count must equal `end - start`. Pure function of its
/// inputs; returns `false` for malformed proofs instead of erroring. Uses
/// the canonical SHA-256 scheme.
pub fn verify_aggregated_proof<T: AsRef<[u8]>>(
    root: &MerkleHash,
    elements: &[T],
    start: usize,
    end: usize,
    proof: &RangeProof,
) -> bool {
    proof.verify(root, elements, start, end)
}
