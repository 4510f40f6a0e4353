//! # Adapter Registry Benchmarks
//!
//! | Crate | Claim |
//! |-------|-------|
//! | ar-01 Ordered Registry | O(1) append, membership and swap-pop removal |
//! | ar-02 Adapter Registry | aggregation linear in adapter calls |
//! | ar-03 Token Registry | decomposition linear in leaves |
//! | ar-04 Signature Verifier | digest linear in batch size, recovery constant |

use criterion::{criterion_group, criterion_main};
use registry_tests::benchmarks::{
    ar_01_ordered_registry, ar_02_aggregation, ar_03_decomposition, ar_04_signature,
};

criterion_group!(
    benches,
    ar_01_ordered_registry::register_benchmarks,
    ar_02_aggregation::register_benchmarks,
    ar_03_decomposition::register_benchmarks,
    ar_04_signature::register_benchmarks,
);

criterion_main!(benches);
