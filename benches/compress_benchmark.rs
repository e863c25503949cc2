use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kupyna::compress::{Compressor, KUPYNA_256, KUPYNA_512};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (name, config) in [("compress 64 byte block", KUPYNA_256), ("compress 128 byte block", KUPYNA_512)] {
        let block: Vec<u8> = (0..config.block_size()).map(|i| i as u8).collect();
        let mut h = config.initial_state();
        c.bench_function(name, |b| {
            b.iter(|| {
                config.compress(black_box(&mut h), black_box(&block));
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
