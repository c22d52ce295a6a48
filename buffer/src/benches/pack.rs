use commonware_buffer::ByteStore;
use criterion::{black_box, criterion_group, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Benchmark packing a message of mixed fields, `items` of which are in a trailing sequence.
fn bench_pack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for items in [16, 256, 4096] {
        let payload: Vec<u8> = (0..items).map(|_| rng.gen()).collect();
        let sequence: Vec<u32> = (0..items).map(|_| rng.gen()).collect();
        c.bench_function(&format!("{}/items={}", module_path!(), items), |b| {
            b.iter(|| {
                let mut store = ByteStore::with_capacity(32 + payload.len() + 4 * items);
                store
                    .pack()
                    .u64(black_box(0xdeadbeefcafebabe))
                    .u32(black_box(0x8badf00d))
                    .pad(4)
                    .buffer(&payload)
                    .sequence(&sequence);
                black_box(store)
            });
        });
    }
}

criterion_group!(benches, bench_pack);
