//! Tessera Search: one deterministic graph-search loop, five strategies.
//!
//! This crate knows nothing about sliding tiles. Problems plug in through
//! [`contract::SearchProblem`]; heuristics through [`heuristic::Heuristic`].
//!
//! # Crate dependency graph
//!
//! ```text
//! tessera_kernel      tessera_search  ←  tessera_harness
//! (board, digests)    (frontier, loop)   (puzzle problem, runner, reports, CLI)
//!        ↑_______________________________________|
//! ```
//!
//! # Key types
//!
//! - [`frontier::Frontier`]: FIFO / LIFO / priority pending-work container
//! - [`node::SearchNode`]: state plus cost bookkeeping
//! - [`policy::Strategy`]: the five traversal configurations
//! - [`policy::SearchPolicy`]: strategy plus optional expansion budget
//! - [`search::search`]: the engine entry point
//! - [`search::SearchResult`]: actions, expansion count, trace, depth

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod trace;
