//! Binary Merkle tree vector commitment.
//!
//! Commits to an ordered list of arbitrary byte strings with a single
//! 32-byte root, and supports:
//!
//! - [`MerkleTree::get_proof`] — succinct proof that an element occupies a
//!   given position, checked by [`verify_proof`].
//! - [`MerkleTree::update_element`] — in-place replacement of one element
//!   with O(log n) root recomputation.
//! - [`MerkleTree::get_aggregated_proof`] — compressed proof for a
//!   contiguous range of positions, checked by [`verify_aggregated_proof`],
//!   carrying at most two digests per level instead of one full path per
//!   element.
//!
//! # Layout
//!
//! The leaf list is padded on the right with empty strings to the next
//! power of two and every node digest is stored level by level, so the tree
//! is always perfect and nodes are addressed by `(level, position)` with no
//! pointer chasing.
//!
//! # Hashing
//!
//! The hash scheme is injected at construction through [`MerkleHasher`].
//! The canonical [`Sha256Hasher`] commits leaves as `SHA-256(bytes)` and
//! parents as `SHA-256(hex(left) || hex(right))` over the children's
//! fixed-width lowercase-hex encodings, keeping the child boundary
//! unambiguous.
//!
//! # Concurrency
//!
//! Everything here is synchronous in-memory computation. The tree carries
//! no internal locking; callers that read while another thread updates
//! must serialize access themselves.
//!
//! # Example
//!
//! ```
//! use vector_merkle_tree::{MerkleTree, verify_proof};
//!
//! let elements = ["some", "test", "elements"];
//! let mut tree = MerkleTree::from_elements(&elements);
//!
//! let proof = tree.get_proof(2).unwrap();
//! assert!(verify_proof(&tree.root(), &proof));
//!
//! tree.update_element(1, b"replacement").unwrap();
//! assert!(!verify_proof(&tree.root(), &proof)); // stale proof
//! assert!(verify_proof(&tree.root(), &tree.get_proof(2).unwrap()));
//! ```

#![warn(missing_docs)]

mod error;
mod hash;
mod proof;
mod tree;
mod verify;


pub use error::{MerkleTreeError, Result};
pub use hash::{HASH_LENGTH, MerkleHash, MerkleHasher, Sha256Hasher};
pub use proof::{BoundaryHashes, InclusionProof, RangeProof};
pub use tree::MerkleTree;
pub use verify::{verify_aggregated_proof, verify_proof};
