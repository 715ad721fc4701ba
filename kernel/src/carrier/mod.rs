//! Carrier module: the sliding-tile board, blank moves, and textual input.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod board;
pub mod moves;
pub mod parse;
