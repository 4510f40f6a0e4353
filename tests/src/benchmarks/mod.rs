//! # Registry Benchmarks
//!
//! Criterion benchmarks per registry crate. Each module exposes
//! `register_benchmarks`, collected by `benches/registry_benchmarks.rs`.

pub mod ar_01_ordered_registry;
pub mod ar_02_aggregation;
