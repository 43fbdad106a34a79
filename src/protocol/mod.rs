/// Batch verification of many proofs over one group.
pub mod batch;
/// Prover implementation for generating proofs.
pub mod prover;
/// Prover and verifier bundled over one group.
pub mod schnorr;
/// Verifier implementation for validating proofs.
pub mod verifier;

pub use batch::BatchVerifier;
pub use prover::{Nonce, Prover};
pub use schnorr::Schnorr;
pub use verifier::Verifier;
