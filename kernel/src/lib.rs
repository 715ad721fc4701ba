//! Tessera Kernel: the sliding-tile domain model and canonical digests.
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `proof`
//!
//! `carrier` holds the puzzle state ([`carrier::board::Board`]) and moves;
//! `proof` holds canonical JSON and SHA-256 content hashing. The kernel knows
//! nothing about search; the search crate knows nothing about boards.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
