use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seqops::{copy_into, max, reverse_in_place, sum};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn make_values(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0x5ec_0b5);
    (0..len)
        .map(|_| rng.gen_range(-1_000_000..1_000_000))
        .collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let data = make_values(size);

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, _| {
            b.iter(|| data.iter().sum::<i32>())
        });

        group.bench_with_input(BenchmarkId::new("seqops", size), &size, |b, _| {
            b.iter(|| sum(Some(&data), size))
        });
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let mut std_buf = make_values(size);
        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, _| {
            b.iter(|| std_buf.reverse())
        });

        let mut buf = make_values(size);
        group.bench_with_input(BenchmarkId::new("seqops", size), &size, |b, _| {
            b.iter(|| {
                if let Err(err) = reverse_in_place(Some(&mut buf), size) {
                    panic!("reverse_in_place failed: {err}");
                }
            })
        });
    }
    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let src = make_values(size);

        let mut std_dst = vec![0i32; size];
        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, _| {
            b.iter(|| std_dst.copy_from_slice(&src))
        });

        let mut dst = vec![0i32; size];
        group.bench_with_input(BenchmarkId::new("seqops", size), &size, |b, _| {
            b.iter(|| {
                if let Err(err) = copy_into(Some(&mut dst), Some(&src), size) {
                    panic!("copy_into failed: {err}");
                }
            })
        });
    }
    group.finish();
}

fn bench_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("max");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let data = make_values(size);

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, _| {
            b.iter(|| data.iter().copied().max())
        });

        group.bench_with_input(BenchmarkId::new("seqops", size), &size, |b, _| {
            b.iter(|| max(Some(&data), size, None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum, bench_reverse, bench_copy, bench_max);
criterion_main!(benches);
