use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ecc_aead::{Cipher, CurveId, KeyPair, SharedKey, SymmetricAlgorithm, derive, sizes};

fn benchmark_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_generation");

    for curve in CurveId::ALL {
        group.bench_function(curve.name(), |b| {
            b.iter(|| black_box(KeyPair::generate(curve).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_key_agreement(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_agreement");

    for curve in CurveId::ALL {
        let alice = KeyPair::generate(curve).unwrap();
        let bob = KeyPair::generate(curve).unwrap();

        group.bench_function(curve.name(), |b| {
            b.iter(|| black_box(derive(alice.private_key(), bob.public_key()).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_encrypt_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_decrypt");
    let key = SharedKey::from_bytes([0x42u8; sizes::KEY_SIZE]);

    for algorithm in SymmetricAlgorithm::ALL {
        if !algorithm.is_available() {
            continue;
        }
        let cipher = Cipher::new(&key, algorithm).unwrap();

        // Test with different sizes
        for size in [64, 256, 1024, 4096, 16384].iter() {
            let data = vec![0x42u8; *size];
            group.throughput(Throughput::Bytes(*size as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("{}/encrypt", algorithm), size),
                &data,
                |b, data| {
                    b.iter(|| black_box(cipher.encrypt(data).unwrap()));
                },
            );

            let encrypted = cipher.encrypt(&data).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{}/decrypt", algorithm), size),
                &encrypted,
                |b, encrypted| {
                    b.iter(|| black_box(cipher.decrypt(encrypted).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_hex_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_strings");
    let cipher = Cipher::with_default_algorithm(&SharedKey::from_bytes([7u8; sizes::KEY_SIZE])).unwrap();
    let message = "x".repeat(1024);

    group.bench_function("encrypt_string", |b| {
        b.iter(|| black_box(cipher.encrypt_string(&message).unwrap()));
    });

    let wire = cipher.encrypt_string(&message).unwrap();
    group.bench_function("decrypt_string", |b| {
        b.iter(|| black_box(cipher.decrypt_string(&wire).unwrap()));
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_key_generation, benchmark_key_agreement, benchmark_encrypt_decrypt, benchmark_hex_strings
);
criterion_main!(benches);
