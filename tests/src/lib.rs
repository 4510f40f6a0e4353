//! # Adapter Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per registry crate
//! │   ├── ar_01_ordered_registry.rs
//! │   ├── ar_02_aggregation.rs
//! │   ├── ar_03_decomposition.rs
//! │   └── ar_04_signature.rs
//! │
//! ├── fixtures.rs       # Directories, counting adapter, nested pool tokens
//! │
//! └── integration/      # Cross-crate flows through the public APIs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # By category
//! cargo test -p registry-tests integration::token_flows
//!
//! # Benchmarks
//! cargo bench -p registry-tests
//! ```

#![allow(unused_variables)]
#![allow(dead_code)]

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
