use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repdist_metrics::{pairwise, CdrDist, Hamming, Jaro, Levenshtein, Metric};

/// Deterministic pseudo-random CDR3-like sequence.
fn random_cdr3(len: usize, seed: u64) -> Vec<u8> {
    let residues = b"ARNDCQEGHILKMFPSTWYV";
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = seed.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(residues[((state >> 33) % 20) as usize]);
    }
    seq
}

fn random_repertoire(n: usize) -> Vec<Vec<u8>> {
    (0..n)
        .map(|i| random_cdr3(8 + i % 18, i as u64 + 1))
        .collect()
}

fn bench_scalar(c: &mut Criterion) {
    let a = random_cdr3(15, 7);
    let b = random_cdr3(17, 13);

    let mut group = c.benchmark_group("scalar");

    let levenshtein = Levenshtein::default();
    group.bench_function("levenshtein", |bench| {
        bench.iter(|| levenshtein.score(black_box(&a), black_box(&b)))
    });

    let jaro = Jaro::default();
    group.bench_function("jaro", |bench| {
        bench.iter(|| jaro.score(black_box(&a), black_box(&b)))
    });

    let cdr_dist = CdrDist::default();
    group.bench_function("cdr_dist", |bench| {
        bench.iter(|| cdr_dist.score(black_box(&a), black_box(&b)))
    });

    let hamming = Hamming::default();
    let c2 = random_cdr3(15, 19);
    group.bench_function("hamming", |bench| {
        bench.iter(|| hamming.score(black_box(&a), black_box(&c2)))
    });

    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");

    for &n in &[100, 400] {
        let repertoire = random_repertoire(n);

        let levenshtein = Levenshtein::default();
        group.bench_with_input(BenchmarkId::new("levenshtein", n), &n, |bench, _| {
            bench.iter(|| pairwise(black_box(&levenshtein), black_box(&repertoire)))
        });

        let cdr_dist = CdrDist::default();
        group.bench_with_input(BenchmarkId::new("cdr_dist", n), &n, |bench, _| {
            bench.iter(|| pairwise(black_box(&cdr_dist), black_box(&repertoire)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_pairwise);
criterion_main!(benches);
