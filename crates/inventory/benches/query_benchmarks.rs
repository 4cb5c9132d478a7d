use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_core::{CaseSensitivity, ProductId};
use stockroom_inventory::ProductStore;
use stockroom_products::{Price, Product};

const SUPPLIERS: [&str; 5] = ["Acme", "Globex", "Initech", "Umbrella", "Hooli"];

fn build_store(size: usize) -> ProductStore {
    (0..size)
        .map(|i| {
            Product::new(
                ProductId::new(i as i64),
                format!("Product {i:05}"),
                Price::from_cents(((i * 7919) % 10_000) as i64),
                ((i * 31) % 500) as i64,
                SUPPLIERS[i % SUPPLIERS.len()],
            )
        })
        .collect()
}

fn bench_read_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_queries");

    for size in [100usize, 1_000, 10_000] {
        let store = build_store(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("find_by_name_miss", size), &store, |b, s| {
            b.iter(|| s.find_by_name(black_box("No Such Product"), CaseSensitivity::Sensitive))
        });
        group.bench_with_input(BenchmarkId::new("count_by_supplier", size), &store, |b, s| {
            b.iter(|| s.count_by_supplier())
        });
        group.bench_with_input(BenchmarkId::new("filter_by_supplier", size), &store, |b, s| {
            b.iter(|| s.filter_by_supplier(black_box("globex"), CaseSensitivity::Insensitive))
        });
        group.bench_with_input(BenchmarkId::new("quantity_stats", size), &store, |b, s| {
            b.iter(|| s.quantity_stats().map(|stats| stats.average))
        });
        group.bench_with_input(BenchmarkId::new("search_by_name", size), &store, |b, s| {
            b.iter(|| s.search_by_name_substring(black_box("PRODUCT 00")))
        });
    }

    group.finish();
}

fn bench_sort_by_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_price_descending");

    for size in [100usize, 1_000, 10_000] {
        let store = build_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("clone_and_sort", size), &store, |b, s| {
            b.iter(|| {
                let mut copy = s.clone();
                copy.sort_by_price_descending();
                copy
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_queries, bench_sort_by_price);
criterion_main!(benches);
