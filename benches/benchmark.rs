//! Benchmarks for the sequence container.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textseq::Sequence;

fn filled(n: usize) -> Sequence {
    let mut seq = Sequence::new();
    for i in 0..n {
        seq.push_back(format!("value-{i}"));
    }
    seq
}

fn bench_push_back(c: &mut Criterion) {
    c.bench_function("push_back", |b| {
        let mut seq = Sequence::new();
        let mut i = 0u64;
        b.iter(|| {
            seq.push_back(format!("value-{i}"));
            i += 1;
        })
    });
}

fn bench_with_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_len");
    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, &size| {
            b.iter(|| black_box(Sequence::with_len(size)))
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front", |b| {
        let mut seq = Sequence::new();
        b.iter(|| {
            seq.insert(0, "front").unwrap();
        })
    });
}

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");
    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, &size| {
            let mut seq = filled(size);
            b.iter(|| {
                seq.insert(size / 2, "mid").unwrap();
                seq.erase(size / 2).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, &size| {
            let seq = filled(size);
            b.iter(|| black_box(seq.get(size - 1).unwrap()))
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let seq = filled(100);
    c.bench_function("clone_100", |b| b.iter(|| black_box(seq.clone())));
}

fn bench_erase_range(c: &mut Criterion) {
    c.bench_function("erase_range_mid", |b| {
        let mut seq = filled(100);
        b.iter(|| {
            seq.erase_range(45, 10).unwrap();
            for _ in 0..10 {
                seq.insert(45, "restored").unwrap();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let seq = filled(100);
    c.bench_function("render_100", |b| b.iter(|| black_box(seq.to_string())));
}

criterion_group!(
    benches,
    bench_push_back,
    bench_with_len,
    bench_insert_front,
    bench_insert_middle,
    bench_get,
    bench_clone,
    bench_erase_range,
    bench_render,
);

criterion_main!(benches);
