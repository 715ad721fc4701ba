//! Canonical hashing: SHA-256 with domain separation.
//!
//! Exactly one place computes content hashes; everything else calls
//! [`canonical_hash`].

use sha2::{Digest, Sha256};

use crate::carrier::board::Board;
use crate::proof::hash_domain::HashDomain;

const PREFIX: &str = "sha256:";

/// A SHA-256 digest rendered as `sha256:<64 lowercase hex>`.
///
/// The rendered form is kept alongside the raw bytes so report writers
/// can borrow it without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    bytes: [u8; 32],
    rendered: String,
}

impl ContentHash {
    fn from_digest(bytes: [u8; 32]) -> Self {
        let rendered = format!("{PREFIX}{}", hex::encode(bytes));
        Self { bytes, rendered }
    }

    /// Raw digest bytes.
    #[must_use]
    pub fn digest(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Hex part without the `sha256:` tag.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.rendered[PREFIX.len()..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Rejected textual digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContentHashError {
    pub input: String,
}

impl std::fmt::Display for ParseContentHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a sha256 content hash: {:?}", self.input)
    }
}

impl std::error::Error for ParseContentHashError {}

impl std::str::FromStr for ContentHash {
    type Err = ParseContentHashError;

    /// Accepts only the form produced by [`canonical_hash`]; uppercase hex
    /// is rejected so that equal digests always have equal text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParseContentHashError {
            input: s.to_string(),
        };
        let body = s.strip_prefix(PREFIX).ok_or_else(reject)?;
        if body.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(reject());
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| reject())?;
        Ok(Self::from_digest(bytes))
    }
}

/// Hash `data` under `domain`: `sha256(domain_bytes || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    ContentHash::from_digest(bytes)
}

/// Fingerprint of a board arrangement.
#[must_use]
pub fn board_fingerprint(board: &Board) -> ContentHash {
    canonical_hash(HashDomain::BoardIdentity, &board.identity_bytes())
}
