use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_code::ecc::BitWord;
use hamming_code::HammingCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_word(rng: &mut StdRng, length: usize) -> BitWord {
    (0..length).map(|_| rng.gen::<bool>()).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_new");
    for m in [3, 6, 9] {
        group.bench_with_input(BenchmarkId::from_parameter(m), &m, |b, &m| {
            b.iter(|| HammingCode::new(black_box(m)))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("hamming_encode");
    for m in [3, 6, 9] {
        let code = HammingCode::new(m).unwrap();
        let data = random_word(&mut rng, code.data_length());
        group.bench_with_input(BenchmarkId::new("positioned", m), &data, |b, data| {
            b.iter(|| code.encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("generator", m), &data, |b, data| {
            b.iter(|| code.encode_with_generator(black_box(data)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("hamming_decode");
    for m in [3, 6, 9] {
        let code = HammingCode::new(m).unwrap();
        let data = random_word(&mut rng, code.data_length());
        let mut received = code.encode(&data).unwrap();
        let index = rng.gen_range(0..code.codeword_length());
        let flipped = !received[index];
        received.set(index, flipped);

        group.bench_with_input(BenchmarkId::from_parameter(m), &received, |b, received| {
            b.iter(|| code.decode(black_box(received)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_encode, bench_decode);
criterion_main!(benches);
