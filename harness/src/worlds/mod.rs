//! Problem worlds the runner can search.

pub mod sliding_tile;
