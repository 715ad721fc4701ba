//! Tessera Harness: the sliding-tile world and everything around a search.
//!
//! The harness owns the problem, its heuristics, run policy, timing,
//! reports and the command line. It does NOT implement search; every run
//! goes through [`tessera_search::search::search_with_policy`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod heuristics;
pub mod policy;
pub mod report;
pub mod runner;
pub mod worlds;
