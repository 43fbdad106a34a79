//! Fiat-Shamir challenge derivation.
//!
//! The challenge is `SHA3-512(g || x || t) mod q`, where each element is
//! written as a decimal string left-padded with zeros to the group's
//! [`encoding_width`](crate::GroupEngine::encoding_width). Fixed-width fields
//! make the separator-free concatenation unambiguous.
//!
//! A [`Transcript`] owns its own hash state and is consumed when the challenge
//! is produced, so one accumulator can never leak into another computation.

use num_bigint::{BigInt, BigUint};
use sha3::{Digest, Sha3_512};

use crate::GroupEngine;

/// One-shot transcript for a single challenge computation.
///
/// Elements are hashed as fixed-width, zero-padded decimal strings, not as
/// canonical decimals. For `p = 23` the element `8` is hashed as `"08"`. A
/// verifier that hashes canonical decimals derives different challenges and
/// will not accept these proofs.
pub struct Transcript {
    hasher: Sha3_512,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self {
            hasher: Sha3_512::new(),
        }
    }

    /// Binds the proof to application-specific context.
    ///
    /// Contexts are length-prefixed and hashed ahead of the protocol fields.
    /// A proof made with a context only verifies against a transcript carrying
    /// the same context, which stops proofs being replayed across sessions.
    /// Without any context the digest covers exactly `g || x || t`.
    pub fn append_context(&mut self, context: &[u8]) {
        self.hasher.update((context.len() as u64).to_be_bytes());
        self.hasher.update(context);
    }

    fn append_element<G: GroupEngine>(&mut self, group: &G, element: &G::Element) {
        let encoded = encode_element(group, element);
        self.hasher.update(encoded.as_bytes());
    }

    /// Absorbs `(g, statement, commitment)` in that order and returns the
    /// challenge exponent.
    pub fn challenge<G: GroupEngine>(
        mut self,
        group: &G,
        statement: &G::Element,
        commitment: &G::Element,
    ) -> G::Scalar {
        self.append_element(group, &group.generator());
        self.append_element(group, statement);
        self.append_element(group, commitment);

        let digest = self.hasher.finalize();
        let value = BigInt::from(BigUint::from_bytes_be(&digest));
        group.scalar_from_integer(&value)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the challenge for `(g, statement, commitment)` with a fresh
/// transcript and no context.
pub fn challenge<G: GroupEngine>(
    group: &G,
    statement: &G::Element,
    commitment: &G::Element,
) -> G::Scalar {
    Transcript::new().challenge(group, statement, commitment)
}

/// Fixed-width decimal encoding of an element.
pub(crate) fn encode_element<G: GroupEngine>(group: &G, element: &G::Element) -> String {
    let decimal = group.element_to_integer(element).to_str_radix(10);
    format!("{:0>width$}", decimal, width = group.encoding_width())
}
