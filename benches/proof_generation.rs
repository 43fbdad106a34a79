use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use schnorr_nizk::{
    challenge, rfc5114, GroupEngine, Integer, Prover, Ristretto255, SecureRng, Statement,
    Verifier, Witness,
};

const WITNESS: &str = "31415926535897932384626433832795028841971693993751";

fn statement_for<G: GroupEngine>(group: &G) -> Integer {
    let witness = Witness::from_integer(group, WITNESS).unwrap();
    Statement::from_witness(group, &witness).to_integer(group)
}

fn bench_proof_generation<G: GroupEngine>(c: &mut Criterion, label: &str, group: G) {
    let mut rng = SecureRng::new();
    let prover = Prover::new(group);

    c.bench_function(&format!("{label}_proof_generation"), |b| {
        b.iter(|| prover.prove(black_box(&mut rng), black_box(WITNESS), None).unwrap())
    });
}

fn bench_proof_verification<G: GroupEngine>(c: &mut Criterion, label: &str, group: G) {
    let mut rng = SecureRng::new();
    let x = statement_for(&group);
    let proof = Prover::new(group.clone()).prove(&mut rng, WITNESS, None).unwrap();
    let verifier = Verifier::new(group);

    c.bench_function(&format!("{label}_proof_verification"), |b| {
        b.iter(|| verifier.verify(black_box(x.clone()), black_box(&proof)).unwrap())
    });
}

fn bench_ristretto(c: &mut Criterion) {
    bench_proof_generation(c, "ristretto", Ristretto255::new());
    bench_proof_verification(c, "ristretto", Ristretto255::new());
}

fn bench_rfc5114(c: &mut Criterion) {
    bench_proof_generation(c, "rfc5114", rfc5114());
    bench_proof_verification(c, "rfc5114", rfc5114());
}

fn bench_challenge(c: &mut Criterion) {
    let group = rfc5114();
    let mut rng = SecureRng::new();
    let x = group.power(&group.random_exponent(&mut rng).unwrap());
    let t = group.power(&group.random_exponent(&mut rng).unwrap());

    c.bench_function("rfc5114_challenge", |b| {
        b.iter(|| challenge(black_box(&group), black_box(&x), black_box(&t)))
    });
}

criterion_group!(benches, bench_ristretto, bench_rfc5114, bench_challenge);
criterion_main!(benches);
