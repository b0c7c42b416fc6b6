use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config,
    distinct_keys, mix_seed, pick_key, seed_base, seed_for_iter, sorted_keys,
};
use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use llrb_map::{LlrbTreeMap, OrderedMap, StdBTreeMap};

const SIZES: [usize; 4] = [1_000, 16_000, 64_000, 256_000];
const OPS_PER_ITER: usize = 200;
const GET_HIT_RATE_PERCENT: u64 = 80;

/// One operation of a generated workload.
#[derive(Clone, Copy)]
enum Op {
    Get(u64),
    Floor(u64),
    Ceiling(u64),
    Insert(u64, u64),
    Remove(u64),
}

/// Shape of a timed workload. Whatever is not a read is an update, split
/// evenly between inserts of fresh keys and removes of keys inserted earlier
/// in the same batch, so the map ends every batch at its starting size.
#[derive(Clone, Copy)]
struct Workload {
    id: u64,
    read_percent: u64,
    mutates: bool,
}

const READ_ONLY: Workload = Workload {
    id: 1,
    read_percent: 100,
    mutates: false,
};
const CHURN: Workload = Workload {
    id: 2,
    read_percent: 0,
    mutates: true,
};
const MIXED: Workload = Workload {
    id: 3,
    read_percent: 80,
    mutates: true,
};

fn build<M>(keys: &[u64], seed: u64) -> M
where
    M: OrderedMap<Key = u64, Value = u64>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = M::new();
    for &k in keys {
        black_box(map.insert(k, rng.random()));
    }
    map
}

/// Ops for one timed batch. Fresh keys are numbered past `keys.len()` so they
/// never collide with the prebuilt ones; the live pool is drained at the end.
fn generate_ops(workload: Workload, keys: &[u64], base_seed: u64, iter: u64) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
    let first_fresh = (keys.len() as u64).wrapping_add(iter.wrapping_mul(OPS_PER_ITER as u64));
    let mut live = Vec::new();
    let mut ops = Vec::with_capacity(OPS_PER_ITER + OPS_PER_ITER / 2);

    for i in 0..OPS_PER_ITER as u64 {
        if rng.random_range(0..100) < workload.read_percent {
            let key = pick_key(&mut rng, keys, GET_HIT_RATE_PERCENT);
            ops.push(match rng.random_range(0..3) {
                0 => Op::Get(key),
                1 => Op::Floor(key),
                _ => Op::Ceiling(key),
            });
        } else if live.is_empty() || rng.random_bool(0.5) {
            let key = mix_seed(base_seed ^ first_fresh.wrapping_add(i));
            live.push(key);
            ops.push(Op::Insert(key, rng.random()));
        } else {
            let key = live.swap_remove(rng.random_range(0..live.len()));
            ops.push(Op::Remove(key));
        }
    }
    ops.extend(live.into_iter().map(Op::Remove));
    ops
}

fn run_ops<M>(map: &mut M, ops: &[Op])
where
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &op in ops {
        match op {
            Op::Get(key) => {
                black_box(map.get(&key).copied());
            }
            Op::Floor(key) => {
                black_box(map.floor(&key).map(|(k, v)| (*k, *v)));
            }
            Op::Ceiling(key) => {
                black_box(map.ceiling(&key).map(|(k, v)| (*k, *v)));
            }
            Op::Insert(key, value) => {
                black_box(map.insert(key, value));
            }
            Op::Remove(key) => {
                black_box(map.remove(&key));
            }
        }
    }
}

fn bench_workload<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, workload: Workload)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(workload.id, size as u64);
        let keys = distinct_keys(size, base_seed);
        let mut map: M = build(&keys, mix_seed(base_seed));

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                (0..iters)
                    .map(|iter| {
                        let ops = generate_ops(workload, &keys, base_seed, iter);
                        let start = Instant::now();
                        run_ops(&mut map, &ops);
                        if workload.mutates {
                            black_box(map.len());
                        }
                        start.elapsed()
                    })
                    .sum::<Duration>()
            })
        });
    }
}

fn bench_both<T>(group: &mut BenchmarkGroup<'_, T>, workload: Workload)
where
    T: Measurement<Value = Duration>,
{
    bench_workload::<StdBTreeMap<u64, u64>, _>(group, "std_btree", workload);
    bench_workload::<LlrbTreeMap<u64, u64>, _>(group, "llrb", workload);
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_both(group, READ_ONLY);
}

pub fn bench_all_mixed<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_both(group, MIXED);
}

pub fn bench_all_update<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_both(group, CHURN);
}

/// Build from ascending keys, the degenerate input for a plain BST.
pub fn bench_sorted_build<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
{
    for &size in &SIZES[..2] {
        apply_medium_runtime_config(group);
        let keys = sorted_keys(size);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let map: M = build(&keys, 0);
                black_box(map.len())
            })
        });
    }
}

/// Rank and select, which only the red-black map supports.
pub fn bench_order_stats<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(4, size as u64);
        let keys = distinct_keys(size, base_seed);
        let map: LlrbTreeMap<u64, u64> = keys.iter().map(|&k| (k, mix_seed(k))).collect();

        group.bench_function(BenchmarkId::new("rank", size), |bencher| {
            let mut rng = StdRng::seed_from_u64(base_seed);
            bencher.iter(|| {
                let key = pick_key(&mut rng, &keys, GET_HIT_RATE_PERCENT);
                black_box(map.rank(&key))
            })
        });
        group.bench_function(BenchmarkId::new("select", size), |bencher| {
            let mut rng = StdRng::seed_from_u64(base_seed);
            bencher.iter(|| black_box(map.select(rng.random_range(0..size))))
        });
    }
}

/// Empty the tree through `delete_min` / `delete_max`.
pub fn bench_drain<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for &size in &SIZES[..2] {
        apply_large_runtime_config(group);
        let keys = distinct_keys(size, seed_base(5, size as u64));
        let map: LlrbTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();

        group.bench_function(BenchmarkId::new("delete_min", size), |bencher| {
            bencher.iter_batched(
                || entries.iter().copied().collect::<LlrbTreeMap<_, _>>(),
                |mut map| {
                    while let Ok(entry) = map.delete_min() {
                        black_box(entry);
                    }
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(BenchmarkId::new("delete_max", size), |bencher| {
            bencher.iter_batched(
                || entries.iter().copied().collect::<LlrbTreeMap<_, _>>(),
                |mut map| {
                    while let Ok(entry) = map.delete_max() {
                        black_box(entry);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

pub fn bench_all_sorted_build<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_sorted_build::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_sorted_build::<LlrbTreeMap<u64, u64>, _>(group, "llrb");
}
