//! Proof module: canonical JSON and domain-separated content hashes.
//!
//! Depends on `carrier`. Nothing in `carrier` depends on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
