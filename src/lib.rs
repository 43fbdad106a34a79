//! Non-interactive Schnorr proofs of knowledge of a discrete logarithm.
//!
//! A prover convinces a verifier that it knows `r` with `x = g^r` in a cyclic
//! group, without revealing `r`. The interactive protocol is made
//! non-interactive with the Fiat-Shamir transform: the challenge is
//! `SHA3-512(g || x || t) mod q`.
//!
//! The group is pluggable through [`GroupEngine`]. Two backends ship with the
//! crate: [`ModpGroup`] (prime-field multiplicative groups, including the
//! ready-made [`rfc5114`] group) and [`Ristretto255`].
//!
//! # Example
//!
//! ```rust
//! use schnorr_nizk::{rfc5114, Prover, SecureRng, Statement, Verifier, Witness};
//!
//! let group = rfc5114();
//! let mut rng = SecureRng::new();
//!
//! let witness = Witness::from_integer(&group, "123456789").unwrap();
//! let statement = Statement::from_witness(&group, &witness).to_integer(&group);
//!
//! let proof = Prover::new(group.clone())
//!     .prove(&mut rng, "123456789", Some(statement.clone()))
//!     .unwrap();
//! assert!(Verifier::new(group).verify(statement, &proof).unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Group configuration loading.
#[cfg(feature = "config")]
pub mod config;
/// Error types.
pub mod error;
/// Core primitives: group engines, gadgets, and transcript.
pub mod primitives;
/// Proof generation and verification.
pub mod protocol;

#[cfg(feature = "config")]
pub use config::GroupConfig;
pub use error::Error;
pub use primitives::{
    challenge, rfc5114, GroupEngine, Integer, ModpGroup, Proof, Ristretto255, SecureRng,
    Statement, Transcript, Witness,
};
pub use protocol::{BatchVerifier, Nonce, Prover, Schnorr, Verifier};

/// Result type for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
