//! 5x52 field element encoding benchmarks

use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement};
use fe52::{FieldElement5x52, debug_repr, hex, pack};
use std::hint::black_box;

const LIMBS: [u64; 5] = [
    1293581911306459,
    534340368401923,
    2629461762533819,
    1417293729163992,
    179486335370645,
];

const TEXT: &str = "FieldElement5x52([1293581911306459, 534340368401923, 2629461762533819, 1417293729163992, 179486335370645])";

fn bench_pack<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("pack", |b| b.iter(|| pack(black_box(&LIMBS))));
}

fn bench_to_hex<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let bytes = pack(&LIMBS);
    group.bench_function("to_hex", |b| b.iter(|| hex::to_hex(black_box(&bytes))));
}

fn bench_parse<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("parse", |b| b.iter(|| debug_repr::parse(black_box(TEXT))));
}

fn bench_is_normalized<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let fe = FieldElement5x52::from_limbs(LIMBS);
    group.bench_function("is_normalized", |b| {
        b.iter(|| black_box(fe).is_normalized())
    });
}

fn bench_encode_hex<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("encode_hex", |b| b.iter(|| fe52::encode_hex(black_box(TEXT))));
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element encoding");
    bench_pack(&mut group);
    bench_to_hex(&mut group);
    bench_parse(&mut group);
    bench_is_normalized(&mut group);
    bench_encode_hex(&mut group);
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
