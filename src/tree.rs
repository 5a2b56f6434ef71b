//! The Merkle tree: construction, root access, proof generation, updates.

use crate::error::{MerkleTreeError, Result};
use crate::hash::{MerkleHash, MerkleHasher, Sha256Hasher};
use crate::proof::{BoundaryHashes, InclusionProof, RangeProof};

/// A binary Merkle tree committing to an ordered list of byte strings.
///
/// The leaf list is padded on the right with empty strings up to the next
/// power of two, so the tree is always perfect: level 0 holds the `2^h`
/// leaf digests and level `h` holds the single root. All node digests are
/// stored level by level, giving O(1) root access and O(log n) proof and
/// update walks.
///
/// An empty input is accepted and committed as a single empty leaf
/// (height 0); `leaf_count()` stays 0, so no index is provable or
/// updatable on such a tree.
///
/// The tree is a plain mutable value with no internal synchronization.
/// `update_element` rewrites stored levels in place, so concurrent access
/// during an update must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct MerkleTree<H: MerkleHasher = Sha256Hasher> {
    /// Node digests per level; `levels[0]` are the padded leaf digests,
    /// `levels[height]` is the root.
    levels: Vec<Vec<MerkleHash>>,
    /// Number of committed elements, excluding padding. Fixed at
    /// construction; the tree does not grow.
    leaf_count: usize,
    hasher: H,
}

impl MerkleTree<Sha256Hasher> {
    /// Build a tree over `elements` with the canonical SHA-256 scheme.
    ///
    /// Never fails: an empty input commits to a single empty leaf.
    pub fn from_elements<T: AsRef<[u8]>>(elements: &[T]) -> Self {
        Self::with_hasher(elements, Sha256Hasher)
    }
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree over `elements` with an injected hashing strategy.
    pub fn with_hasher<T: AsRef<[u8]>>(elements: &[T], hasher: H) -> Self {
        let leaf_count = elements.len();
        let padded = leaf_count.max(1).next_power_of_two();

        let mut leaf_level = Vec::with_capacity(padded);
        leaf_level.extend(elements.iter().map(|e| hasher.hash_leaf(e.as_ref())));
        let empty_leaf = hasher.hash_leaf(&[]);
        leaf_level.resize(padded, empty_leaf);

        let height = padded.trailing_zeros() as usize;
        let mut levels = Vec::with_capacity(height + 1);
        levels.push(leaf_level);
        for level in 1..=height {
            let below: &Vec<MerkleHash> = &levels[level - 1];
            let above = below
                .chunks_exact(2)
                .map(|pair| hasher.hash_node(&pair[0], &pair[1]))
                .collect();
            levels.push(above);
        }

        Self {
            levels,
            leaf_count,
            hasher,
        }
    }

    /// The root digest. Reflects the latest successful `update_element`.
    pub fn root(&self) -> MerkleHash {
        self.levels[self.height()][0]
    }

    /// Tree height: the number of levels below the root.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Number of committed elements (padding excluded).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of leaf slots including padding (always a power of two).
    pub fn padded_leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Generate an inclusion proof for the element at `index`.
    ///
    /// Walks from the leaf to the root, recording at each level the digest
    /// at `pos ^ 1` and whether that sibling is the left child of the pair
    /// (`true` exactly when `pos` is odd).
    ///
    /// Fails with [`MerkleTreeError::IndexOutOfRange`] when `index` is at
    /// or beyond the committed element count; padding slots participate in
    /// hashing but are not provable.
    pub fn get_proof(&self, index: usize) -> Result<InclusionProof> {
        if index >= self.leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange {
                index,
                len: self.leaf_count,
            });
        }

        let height = self.height();
        let mut siblings = Vec::with_capacity(height);
        let mut directions = Vec::with_capacity(height);
        let mut pos = index;
        for level in 0..height {
            siblings.push(self.levels[level][pos ^ 1]);
            directions.push(pos % 2 == 1);
            pos /= 2;
        }

        Ok(InclusionProof::new(
            self.levels[0][index],
            siblings,
            directions,
        ))
    }

    /// Replace the element at `index` and recompute the path to the root.
    ///
    /// O(log n) work and O(1) extra space: only the leaf digest and its
    /// ancestors change. Proofs generated before the update keep verifying
    /// against the old root but fail against the new one.
    ///
    /// Fails with [`MerkleTreeError::IndexOutOfRange`] when `index` is at
    /// or beyond the element count fixed at construction; the tree does
    /// not grow.
    pub fn update_element(&mut self, index: usize, element: &[u8]) -> Result<()> {
        if index >= self.leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange {
                index,
                len: self.leaf_count,
            });
        }

        self.levels[0][index] = self.hasher.hash_leaf(element);
        let mut pos = index;
        for level in 1..=self.height() {
            pos /= 2;
            let parent = self
                .hasher
                .hash_node(&self.levels[level - 1][2 * pos], &self.levels[level - 1][2 * pos + 1]);
            self.levels[level][pos] = parent;
        }
        Ok(())
    }

    /// Generate a compressed inclusion proof for the element range
    /// `[start, end)`.
    ///
    /// At each level the range collapses to a contiguous span of positions
    /// `[cs, ce]`. The proof carries the left neighbor digest when `cs` is
    /// odd and the right neighbor digest when `ce` is even — at most two
    /// digests per level, independent of the range length. Everything
    /// inside the span is rederivable from the elements the verifier is
    /// given, so it is never included.
    ///
    /// Fails with [`MerkleTreeError::InvalidRange`] when `start >= end`,
    /// and with [`MerkleTreeError::IndexOutOfRange`] when `end` exceeds
    /// the committed element count.
    pub fn get_aggregated_proof(&self, start: usize, end: usize) -> Result<RangeProof> {
        if start >= end {
            return Err(MerkleTreeError::InvalidRange { start, end });
        }
        if end > self.leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange {
                index: end,
                len: self.leaf_count,
            });
        }

        let height = self.height();
        let mut levels = Vec::with_capacity(height);
        let mut cs = start;
        let mut ce = end - 1;
        for level in 0..height {
            let left = (cs % 2 == 1).then(|| self.levels[level][cs - 1]);
            let right = (ce % 2 == 0).then(|| self.levels[level][ce + 1]);
            levels.push(BoundaryHashes { left, right });
            cs /= 2;
            ce /= 2;
        }

        Ok(RangeProof::new(start, end, levels))
    }
}
