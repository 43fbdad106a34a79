//! Common test utilities shared across integration tests.

use schnorr_nizk::{GroupEngine, Integer, Statement, Witness};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Shows debug-level output from this crate on the test writer. Subsequent
/// calls are safe and will be ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("schnorr_nizk=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Computes the encoded statement `g^r` for a witness.
#[allow(dead_code)]
pub fn statement_for<G: GroupEngine>(group: &G, r: impl Into<Integer>) -> Integer {
    let witness = Witness::from_integer(group, r).expect("witness should be well-formed");
    Statement::from_witness(group, &witness).to_integer(group)
}
