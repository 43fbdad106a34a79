mod common;

use std::collections::HashSet;

use num_bigint::BigUint;
use schnorr_nizk::{
    challenge, rfc5114, GroupEngine, ModpGroup, Proof, Prover, Ristretto255, Schnorr, SecureRng,
    Verifier,
};

fn toy_group() -> ModpGroup {
    ModpGroup::from_encoded("23", "5", None).expect("toy parameters should be valid")
}

#[test]
fn small_group_vector() {
    common::init_tracing();

    let group = toy_group();
    assert_eq!(common::statement_for(&group, 6u32).to_bigint(), Some(8.into()));

    let mut rng = SecureRng::new();
    let proof = Prover::new(group.clone())
        .prove(&mut rng, 6u32, Some(8u32.into()))
        .expect("Proof generation should succeed");

    let verifier = Verifier::new(group);
    assert!(verifier.verify(8u32, &proof).unwrap(), "Valid proof should verify");
}

#[test]
fn small_group_vector_satisfies_verification_identity() {
    let group = toy_group();
    let mut rng = SecureRng::new();
    let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, None).unwrap();

    let t = group
        .element_from_integer(&proof.commitment().to_biguint().unwrap())
        .expect("commitment should be a group element");
    let s = group.scalar_from_integer(&proof.response().to_bigint().unwrap());
    let x = group.element_from_integer(&BigUint::from(8u32)).unwrap();
    let c = challenge(&group, &x, &t);

    let rhs = group.element_mul(&group.power(&s), &group.power_of(&x, &c));
    assert_eq!(t, rhs, "t must equal g^s * x^c");
}

#[test]
fn completeness_rfc5114() {
    common::init_tracing();

    let group = rfc5114();
    let mut rng = SecureRng::new();
    let r = "98765432109876543210987654321";
    let x = common::statement_for(&group, r);

    let proof = Prover::new(group.clone()).prove(&mut rng, r, None).unwrap();
    assert!(Verifier::new(group).verify(x, &proof).unwrap());
}

#[test]
fn completeness_ristretto() {
    let group = Ristretto255::new();
    let mut rng = SecureRng::new();
    let x = common::statement_for(&group, 42u32);

    let proof = Prover::new(group.clone()).prove(&mut rng, 42u32, None).unwrap();
    assert!(Verifier::new(group).verify(x, &proof).unwrap());
}

#[test]
fn native_and_decimal_encodings_are_interchangeable() {
    let group = rfc5114();
    let mut rng = SecureRng::new();
    let prover = Prover::new(group.clone());
    let verifier = Verifier::new(group.clone());

    let x = common::statement_for(&group, 1234u32);
    let x_decimal = x.to_decimal().unwrap();

    let native = prover.prove(&mut rng, 1234u32, None).unwrap();
    let decimal = prover.prove(&mut rng, "1234", Some(x_decimal.as_str().into())).unwrap();

    for proof in [&native, &decimal] {
        assert!(verifier.verify(x.clone(), proof).unwrap());
        assert!(verifier.verify(x_decimal.as_str(), proof).unwrap());
    }
}

#[test]
fn nonces_are_independent() {
    let group = rfc5114();
    let mut rng = SecureRng::new();
    let prover = Prover::new(group.clone());
    let verifier = Verifier::new(group.clone());
    let x = common::statement_for(&group, 6u32);

    let first = prover.prove(&mut rng, 6u32, None).unwrap();
    let second = prover.prove(&mut rng, 6u32, None).unwrap();

    assert_ne!(first.commitment().to_bigint(), second.commitment().to_bigint());
    assert_ne!(first.response().to_bigint(), second.response().to_bigint());
    assert!(verifier.verify(x.clone(), &first).unwrap());
    assert!(verifier.verify(x, &second).unwrap());

    let commitments: HashSet<String> = (0..20)
        .map(|_| {
            let proof = prover.prove(&mut rng, 6u32, None).unwrap();
            proof.commitment().to_decimal().unwrap()
        })
        .collect();
    assert_eq!(commitments.len(), 20, "Every proof should use a fresh nonce");
}

#[test]
fn proof_json_roundtrip_still_verifies() {
    let group = rfc5114();
    let mut rng = SecureRng::new();
    let x = common::statement_for(&group, 77u32);

    let proof = Prover::new(group.clone()).prove(&mut rng, 77u32, None).unwrap();
    let json = proof.to_json().unwrap();
    assert!(json.starts_with(r#"{"commitment":""#));

    let decoded = Proof::from_json(&json).unwrap();
    assert!(Verifier::new(group).verify(x, &decoded).unwrap());
}

#[test]
fn proof_accepts_numeric_json_fields() {
    let group = toy_group();
    let mut rng = SecureRng::new();
    let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, None).unwrap();

    let json = format!(
        r#"{{"commitment":{},"response":{}}}"#,
        proof.commitment(),
        proof.response()
    );
    let decoded = Proof::from_json(&json).unwrap();
    assert!(Verifier::new(group).verify(8u32, &decoded).unwrap());
}

#[test]
fn facade_over_decimal_parameters() {
    let schnorr = Schnorr::from_params("23", "5").unwrap();
    let proof = schnorr.prove("6", None).unwrap();
    assert!(schnorr.verify("8", &proof).unwrap());
}

#[test]
fn verifier_does_not_consume_randomness() {
    let group = rfc5114();
    let mut rng = SecureRng::new();
    let x = common::statement_for(&group, 5u32);
    let proof = Prover::new(group.clone()).prove(&mut rng, 5u32, None).unwrap();

    let verifier = Verifier::new(group);
    let first = verifier.verify(x.clone(), &proof).unwrap();
    let second = verifier.verify(x, &proof).unwrap();
    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_proving_and_verification() {
    let group = rfc5114();
    let mut handles = Vec::new();

    for r in 1u32..=16 {
        let group = group.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let mut rng = SecureRng::new();
            let x = common::statement_for(&group, r);
            let proof = Prover::new(group.clone()).prove(&mut rng, r, None).unwrap();
            Verifier::new(group).verify(x, &proof).unwrap()
        }));
    }

    for handle in handles {
        assert!(handle.await.expect("task should not panic"));
    }
}
