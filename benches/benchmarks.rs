use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geohash_codec::{self as geohash, BITS_MAX, PRECISION_HIGH, PRECISION_MAX};

const LAT: f64 = 38.05339909138269;
const LNG: f64 = -84.70121386485815;
const HASH: &str = "dngb2x6mnetr";
const HASH_HIGH: &str = "dngb2x6mnetr3zzycbjt";
const HASH_INT: u64 = 0x651ea174d3a37371;

pub fn encode_benchmark(c: &mut Criterion) {
    c.bench_function("encode", |b| {
        b.iter(|| geohash::encode(black_box(LAT), black_box(LNG)))
    });
    c.bench_function("encode precision", |b| {
        b.iter(|| geohash::encode_with_precision(black_box(LAT), black_box(LNG), PRECISION_MAX))
    });
    c.bench_function("encode int", |b| {
        b.iter(|| geohash::encode_int(black_box(LAT), black_box(LNG)))
    });
    c.bench_function("encode int precision", |b| {
        b.iter(|| geohash::encode_int_with_precision(black_box(LAT), black_box(LNG), BITS_MAX))
    });

    // Both string codecs at the precision they share
    let mut group = c.benchmark_group("encode 12 chars");
    group.bench_function("integer", |b| {
        b.iter(|| geohash::encode_with_precision(black_box(LAT), black_box(LNG), PRECISION_MAX))
    });
    group.bench_function("bisection", |b| {
        b.iter(|| geohash::encode_high_precision(black_box(LAT), black_box(LNG), PRECISION_MAX))
    });
    group.finish();

    c.bench_function("encode high precision", |b| {
        b.iter(|| geohash::encode_high_precision(black_box(LAT), black_box(LNG), PRECISION_HIGH))
    });
}

pub fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("decode", |b| b.iter(|| geohash::decode(black_box(HASH))));
    c.bench_function("decode high precision", |b| {
        b.iter(|| geohash::decode_high_precision(black_box(HASH_HIGH)))
    });
    c.bench_function("decode int", |b| {
        b.iter(|| geohash::decode_int(black_box(HASH_INT)))
    });
    c.bench_function("decode int precision", |b| {
        b.iter(|| geohash::decode_int_with_precision(black_box(HASH_INT), BITS_MAX))
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark);
criterion_main!(benches);
