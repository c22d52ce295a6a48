use commonware_buffer::{ByteStore, Unpacker};
use criterion::{black_box, criterion_group, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Benchmark unpacking the message produced by the pack benchmark.
fn bench_unpack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for items in [16, 256, 4096] {
        let payload: Vec<u8> = (0..items).map(|_| rng.gen()).collect();
        let sequence: Vec<u32> = (0..items).map(|_| rng.gen()).collect();
        let mut store = ByteStore::new();
        store
            .pack()
            .u64(0xdeadbeefcafebabe)
            .u32(0x8badf00d)
            .pad(4)
            .buffer(&payload)
            .sequence(&sequence);

        c.bench_function(&format!("{}/items={}", module_path!(), items), |b| {
            b.iter(|| {
                let mut up = Unpacker::new(black_box(store.as_slice()));
                let a = up.u64().unwrap();
                let tag = up.u32().unwrap();
                up.skip(4).unwrap();
                let payload = up.buffer().unwrap();
                let sequence = up.get::<Vec<u32>>().unwrap();
                up.finish().unwrap();
                black_box((a, tag, payload, sequence))
            });
        });
    }
}

criterion_group!(benches, bench_unpack);
