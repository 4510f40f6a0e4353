//! # AR-02 Aggregation Benchmarks
//!
//! Fan-out cost of `get_balances_and_rates` across adapter and asset counts.

use std::sync::Arc;

use ar_02_adapter_registry::{AdapterRegistryApi, StaticProtocolAdapter};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_types::{Address, QueryBudget, U256};

use crate::fixtures::{adapter_registry, protocol_directory, HOLDER, OWNER};

fn id(prefix: u8, i: usize) -> Address {
    let mut out = [prefix; 20];
    out[16..].copy_from_slice(&(i as u32).to_be_bytes());
    out
}

/// Balances and rates over `adapters` adapters of `assets` assets each.
pub fn bench_balances_and_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("ar-02-aggregation");

    for (adapters, assets) in [(10usize, 5usize), (50, 10), (200, 20)] {
        let directory = protocol_directory();
        let registry = adapter_registry(&directory, QueryBudget::default());

        for a in 0..adapters {
            let adapter_id = id(0x01, a);
            let asset_ids: Vec<Address> = (0..assets).map(|i| id(0xA0, a * assets + i)).collect();
            let adapter = asset_ids.iter().fold(
                StaticProtocolAdapter::new(format!("Protocol {}", a)),
                |adapter, asset| {
                    adapter
                        .with_plain_asset(*asset, 18)
                        .with_balance(*asset, HOLDER, U256::from(a + 1))
                },
            );
            directory.deploy(adapter_id, Arc::new(adapter));
            let _ = registry.add_adapter(&OWNER, adapter_id, &asset_ids);
        }

        let calls = adapters * (1 + 2 * assets);
        group.throughput(Throughput::Elements(calls as u64));
        group.bench_with_input(
            BenchmarkId::new("balances_and_rates", format!("{}x{}", adapters, assets)),
            &registry,
            |b, registry| b.iter(|| black_box(registry.get_balances_and_rates(&HOLDER).ok())),
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_balances_and_rates(c);
}
