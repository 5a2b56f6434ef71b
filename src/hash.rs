//! Digest type and the hashing strategy used throughout the tree.
//!
//! The canonical scheme commits to a leaf with `SHA-256(bytes)` and to an
//! internal node with `SHA-256(hex(left) || hex(right))`, where `hex` is the
//! 64-character lowercase encoding of a child digest. Hex digests are fixed
//! width, so plain concatenation cannot be reparsed across the boundary —
//! this is what rules out second-preimage tricks that splice child hashes.
//!
//! The hash function is injected at construction time through the
//! [`MerkleHasher`] trait; [`Sha256Hasher`] is the canonical implementation.

use core::fmt;

use bincode::{Decode, Encode};
use sha2::{Digest, Sha256};

use crate::error::MerkleTreeError;

/// Byte length of a Merkle digest (SHA-256 output).
pub const HASH_LENGTH: usize = 32;

/// A 32-byte node digest.
///
/// Displayed and parsed as lowercase hex; compared as raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub struct MerkleHash([u8; HASH_LENGTH]);

impl MerkleHash {
    /// Wrap a raw 32-byte digest.
    pub fn from_bytes(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding of the digest (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, MerkleTreeError> {
        let bytes = hex::decode(s)
            .map_err(|e| MerkleTreeError::InvalidHash(format!("invalid hex: {}", e)))?;
        let bytes: [u8; HASH_LENGTH] = bytes.try_into().map_err(|v: Vec<u8>| {
            MerkleTreeError::InvalidHash(format!(
                "expected {} bytes, got {}",
                HASH_LENGTH,
                v.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for MerkleHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerkleHash({})", self.to_hex())
    }
}

/// Hashing strategy for leaf commitments and node combination.
///
/// A single hasher instance is fixed at tree construction and used for every
/// node. Both methods must be pure: the same inputs always produce the same
/// digest. Implementations must keep `hash_leaf` and `hash_node` mutually
/// domain-separated so a leaf commitment can never collide with an internal
/// node over attacker-chosen bytes.
pub trait MerkleHasher {
    /// Commit to a single leaf element.
    fn hash_leaf(&self, element: &[u8]) -> MerkleHash;

    /// Combine two child digests into their parent digest.
    fn hash_node(&self, left: &MerkleHash, right: &MerkleHash) -> MerkleHash;
}

/// The canonical SHA-256 hasher.
///
/// Leaves are committed as `SHA-256(bytes)`. Parents hash the concatenation
/// of the children's lowercase-hex encodings, which keeps the child boundary
/// unambiguous (always exactly 64 characters per child).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash_leaf(&self, element: &[u8]) -> MerkleHash {
        MerkleHash(Sha256::digest(element).into())
    }

    fn hash_node(&self, left: &MerkleHash, right: &MerkleHash) -> MerkleHash {
        let mut hasher = Sha256::new();
        hasher.update(left.to_hex().as_bytes());
        hasher.update(right.to_hex().as_bytes());
        MerkleHash(hasher.finalize().into())
    }
}
