use rngkit::{
    AesCtr, ChaCha20, Engine, Pcg32, Xoroshiro128PlusPlus, Xorshift128Plus, Xoshiro256StarStar,
    generate_range, sequence,
};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_next<E: Engine>(c: &mut Criterion, name: &str, mut engine: E) {
    c.bench_function(name, |b| b.iter(|| black_box(engine.next())));
}

pub fn bench_engines(c: &mut Criterion) {
    bench_next(c, "xorshift128+ next", Xorshift128Plus::new(1));
    bench_next(c, "xoroshiro128++ next", Xoroshiro128PlusPlus::new(1));
    bench_next(c, "xoshiro256** next", Xoshiro256StarStar::new(1));
    bench_next(c, "pcg32 next", Pcg32::new(1));
    bench_next(c, "chacha20 next", ChaCha20::new([0; 8], [0; 2]));
    bench_next(c, "aes128-ctr next", AesCtr::new([0; 16], [0; 16]));
}

pub fn bench_block(c: &mut Criterion) {
    let mut chacha = ChaCha20::new([0; 8], [0; 2]);
    c.bench_function("chacha20 64-byte block", |b| {
        b.iter(|| black_box(chacha.next512()))
    });

    let mut pcg = Pcg32::new(1);
    c.bench_function("pcg32 advance 2^40", |b| {
        b.iter(|| pcg.advance(black_box(1 << 40)))
    });
}

pub fn bench_generator(c: &mut Criterion) {
    let mut rng = Xoshiro256StarStar::new(1);

    c.bench_function("generate_range u32 1..=6", |b| {
        b.iter(|| generate_range(&mut rng, black_box(1u32), black_box(6)))
    });

    c.bench_function("sequence 100 of 1..=1000", |b| {
        b.iter(|| sequence(&mut rng, black_box(1u32), black_box(1_000), 100))
    });
}

criterion_group!(benches, bench_engines, bench_block, bench_generator);
criterion_main!(benches);
