use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strand_core::types::{ActiveBundle, Cid, Sid};
use strand_custody::ActiveTable;

const CAPACITY: usize = 16384;

fn bundle(cid: u64) -> ActiveBundle {
    ActiveBundle::new(Cid(cid), Sid(cid + 1), cid)
}

/// Steady-state custody churn at a 75% load factor: acknowledge the oldest
/// entry, track a fresh one.
fn bench_churn(c: &mut Criterion) {
    let mut table = ActiveTable::new(CAPACITY).unwrap();
    let fill = CAPACITY * 3 / 4;
    for cid in 0..fill as u64 {
        table.add(bundle(cid), false).unwrap();
    }
    let mut next_cid = fill as u64;

    c.bench_function("churn_75pct", |b| {
        b.iter(|| {
            let oldest = *table.oldest().unwrap();
            table.remove(black_box(oldest.cid)).unwrap();
            table.add(black_box(bundle(next_cid)), false).unwrap();
            next_cid += 1;
        })
    });
}

/// Lookup-and-remove cost when every entry collides into one bucket.
fn bench_single_bucket_chain(c: &mut Criterion) {
    c.bench_function("chain_walk_256", |b| {
        b.iter_batched(
            || {
                let mut table = ActiveTable::new(4096).unwrap();
                for i in 0..256u64 {
                    table.add(bundle(i * 4096), false).unwrap();
                }
                table
            },
            |mut table| {
                // Remove from the far end of the chain.
                table.remove(black_box(Cid(255 * 4096))).unwrap();
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_churn, bench_single_bucket_chain);
criterion_main!(benches);
