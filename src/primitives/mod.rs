//! Core building blocks for Schnorr proofs.
//!
//! - **crypto**: Modular arithmetic, the group engine trait, and secure randomness
//! - **groups**: Concrete engines (prime-field MODP groups, RFC 5114, Ristretto255)
//! - **integer**: The native/decimal-string boundary encoding
//! - **gadgets**: Witnesses, statements, and proofs
//! - **transcript**: Fiat-Shamir challenge derivation

/// Cryptographic primitives and traits.
pub mod crypto;
/// Protocol gadgets (statements, witnesses, proofs).
pub mod gadgets;
/// Group engine implementations.
pub mod groups;
/// Integer boundary encoding.
pub mod integer;
/// Transcript for the Fiat-Shamir transform.
pub mod transcript;

pub use crypto::{GroupEngine, SecureRng};
pub use gadgets::{Proof, Statement, Witness};
pub use groups::{rfc5114, ModpGroup, Ristretto255};
pub use integer::Integer;
pub use transcript::{challenge, Transcript};
