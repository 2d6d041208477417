use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffzip::{compress_to_vec, decompress_to_vec};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    const DATA_SIZE: usize = 1024 * 1024;

    let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
    // uniform bytes are the worst case for a Huffman coder, skewed
    // text-like data the common one
    let uniform: Vec<u8> = (0..DATA_SIZE).map(|_| rng.gen()).collect();
    let skewed: Vec<u8> = (0..DATA_SIZE)
        .map(|_| {
            if rng.gen_bool(0.8) {
                rng.gen_range(b'a'..=b'h')
            } else {
                rng.gen()
            }
        })
        .collect();

    c.bench_function("compress 1M uniform", |b| {
        b.iter(|| compress_to_vec(black_box(&uniform)))
    });
    c.bench_function("compress 1M skewed", |b| {
        b.iter(|| compress_to_vec(black_box(&skewed)))
    });

    let compressed = compress_to_vec(&skewed);
    c.bench_function("decompress 1M skewed", |b| {
        b.iter(|| decompress_to_vec(black_box(&compressed)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
