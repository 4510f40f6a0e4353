//! # Algorithms Module
//!
//! Core algorithms of the token adapter registry.

pub mod decomposition;

pub use decomposition::{scale_share, Decomposer};
