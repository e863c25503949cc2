use criterion::{criterion_group, criterion_main, Criterion};
use digest::Update;
use digest::FixedOutput;
use kupyna::{kupyna256, Kupyna256Hasher};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut buf = [0; 600];
    for i in buf.iter_mut() {
        *i = rnd.gen();
    }

    c.bench_function("hash 600 bytes", |b| {
        b.iter(|| {
            let mut cw = Kupyna256Hasher::default();
            cw.update(&buf);
            cw.finalize_fixed();
        })
    });

    c.bench_function("hash 600 bytes streaming", |b| {
        b.iter(|| kupyna256::hash(&buf))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
