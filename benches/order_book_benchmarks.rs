use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use depth_book::{Decimal, MissingLevelPolicy, OrderBook, Side};

/// Builds a book with `levels_per_side` integer-priced levels on each side,
/// asks stacked above the bids.
fn populated_book(levels_per_side: i64) -> OrderBook {
    let bids = (0..levels_per_side).map(|i| (Decimal::from(1_000 - i), Decimal::from(i + 1)));
    let asks = (0..levels_per_side).map(|i| (Decimal::from(1_001 + i), Decimal::from(i + 1)));
    OrderBook::new(bids, asks, 1, 1).unwrap()
}

/// Benchmark the performance of upserting a single level into a populated book.
fn benchmark_level_update(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("level_update");

    benchmark_group.bench_function("update_existing_ask", |bencher| {
        let mut book = populated_book(500);

        bencher.iter(|| {
            book.update(
                Side::Ask,
                black_box(Decimal::from(1_030)),
                black_box(Decimal::from(20)),
                MissingLevelPolicy::Insert,
            )
            .unwrap();
        });
    });

    benchmark_group.bench_function("insert_and_remove_bid", |bencher| {
        let mut book = populated_book(500);

        bencher.iter(|| {
            // Insert a fresh level, then take it out again via a zero size
            book.update(
                Side::Bid,
                Decimal::new(9_995, 1),
                Decimal::ONE,
                MissingLevelPolicy::Insert,
            )
            .unwrap();
            book.update(
                Side::Bid,
                Decimal::new(9_995, 1),
                Decimal::ZERO,
                MissingLevelPolicy::Insert,
            )
            .unwrap();
        });
    });

    benchmark_group.finish();
}

/// Benchmark the performance of the best-price snapshot at various book sizes.
fn benchmark_bid_ask_snapshot(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("bid_ask_snapshot");

    for book_size in [100, 1_000, 10_000] {
        benchmark_group.throughput(Throughput::Elements(1));
        let book = populated_book(book_size);

        benchmark_group.bench_with_input(
            BenchmarkId::new("get_bid_ask", book_size),
            &book,
            |bencher, book| {
                bencher.iter(|| {
                    let snapshot = book.get_bid_ask().unwrap();
                    black_box(snapshot);
                });
            },
        );
    }

    benchmark_group.finish();
}

/// Benchmark the performance of ranked retrieval by count, with cumulative sizes.
fn benchmark_top_by_count(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("top_by_count");
    let book = populated_book(500);

    for depth in [2, 10, 100] {
        benchmark_group.bench_with_input(
            BenchmarkId::new("get_top_cumulative", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let top = book.get_top(Side::Ask, depth, true);
                    black_box(top);
                });
            },
        );
    }

    benchmark_group.finish();
}

/// Benchmark the performance of ranked retrieval by price bound, with cumulative sizes.
fn benchmark_top_by_price_bound(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("top_by_price_bound");
    let book = populated_book(500);

    benchmark_group.bench_function("get_top_until_price_cumulative", |bencher| {
        bencher.iter(|| {
            let top = book.get_top_until_price(Side::Bid, black_box(Decimal::from(997)), true);
            black_box(top);
        });
    });

    benchmark_group.finish();
}

/// Benchmark the performance of the cumulative-volume threshold lookup.
fn benchmark_cumulative_threshold(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("cumulative_threshold");

    for book_size in [100, 1_000, 10_000] {
        let book = populated_book(book_size);
        // A threshold deep enough to walk roughly half the side
        let threshold = Decimal::from(book_size * book_size / 8);

        benchmark_group.bench_with_input(
            BenchmarkId::new("get_price_when_cumul_greater", book_size),
            &book,
            |bencher, book| {
                bencher.iter(|| {
                    let price = book.get_price_when_cumul_greater(Side::Bid, threshold);
                    black_box(price);
                });
            },
        );
    }

    benchmark_group.finish();
}

/// Benchmark the performance of bulk-loading a side from a snapshot.
fn benchmark_snapshot_fill(criterion: &mut Criterion) {
    let mut benchmark_group = criterion.benchmark_group("snapshot_fill");

    for snapshot_size in [100, 1_000, 10_000] {
        benchmark_group.throughput(Throughput::Elements(snapshot_size));
        let pairs: Vec<(Decimal, Decimal)> = (0..snapshot_size as i64)
            .map(|i| (Decimal::from(1_001 + i), Decimal::from(i + 1)))
            .collect();

        benchmark_group.bench_with_input(
            BenchmarkId::new("fill_ask_side", snapshot_size),
            &pairs,
            |bencher, pairs| {
                bencher.iter(|| {
                    let mut book = OrderBook::new(Vec::new(), Vec::new(), 1, 1).unwrap();
                    book.fill(Side::Ask, pairs.iter().copied());
                    black_box(book);
                });
            },
        );
    }

    benchmark_group.finish();
}

// Define the benchmarks group to generate the reports automatically
criterion_group!(
    benches,
    benchmark_level_update,
    benchmark_bid_ask_snapshot,
    benchmark_top_by_count,
    benchmark_top_by_price_bound,
    benchmark_cumulative_threshold,
    benchmark_snapshot_fill,
);

criterion_main!(benches);
