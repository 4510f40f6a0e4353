//! # AR-01 Ordered Registry Benchmarks
//!
//! Claims to validate:
//! - append, membership and swap-pop removal stay O(1) as the list grows
//! - removal by value is O(1) through the position index

use ar_01_ordered_registry::{EntryPolicy, OrderedRegistry};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::Address;

fn address(i: usize) -> Address {
    let mut out = [0u8; 20];
    out[12..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
    out
}

fn filled(size: usize) -> OrderedRegistry<Address> {
    let mut registry = OrderedRegistry::new(EntryPolicy::unique_non_null());
    for i in 0..size {
        let _ = registry.add(address(i));
    }
    registry
}

/// Append then swap-pop the same entry at several list sizes.
pub fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("ar-01-add-remove");

    for size in [10usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("add_then_remove_at", size), &size, |b, &size| {
            let mut registry = filled(size);
            let extra = address(size + 1);
            b.iter(|| {
                if let Ok(index) = registry.add(extra) {
                    black_box(registry.remove_at(index).ok());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("remove_by_value", size), &size, |b, &size| {
            let mut registry = filled(size);
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let victim = address(rng.gen_range(0..size));
                if registry.remove_by_value(&victim).is_ok() {
                    let _ = registry.add(victim);
                }
            })
        });
    }

    group.finish();
}

/// Membership tests against a large list.
pub fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("ar-01-contains");
    let registry = filled(100_000);
    let probes: Vec<Address> = (0..1_000).map(|i| address(i * 97)).collect();

    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("contains_1000", |b| {
        b.iter(|| black_box(probes.iter().filter(|p| registry.contains(p)).count()))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_add_remove(c);
    bench_contains(c);
}
