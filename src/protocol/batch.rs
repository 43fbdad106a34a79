//! Batch verification for Schnorr proofs.
//!
//! All proofs in a batch share one group. Each proof `i` is weighted by a
//! fresh random exponent `α_i` and the individual identities
//! `t_i == g^{s_i} * x_i^{c_i}` are folded into a single check:
//!
//! ```text
//! ∏ t_i^{α_i} == g^{Σ α_i s_i} * ∏ x_i^{α_i c_i}
//! ```
//!
//! The random weights stop a malicious prover from crafting proofs whose
//! errors cancel out in the product. That only holds when every commitment and
//! statement lies in the prime-order subgroup generated by `g`: an error of
//! small order `d` vanishes whenever `d` divides its weight. The combined
//! check is therefore skipped unless the group has prime order
//! ([`GroupEngine::has_prime_order`]) and every element passes
//! [`GroupEngine::is_subgroup_member`]. When it is skipped or fails, every
//! proof is verified on its own, so a proof is reported valid by the batch
//! only if [`Verifier::verify`](crate::Verifier::verify) accepts it.

use rand_core::CryptoRngCore;
use tracing::debug;

use crate::{Error, GroupEngine, Integer, Proof, Result, Statement, Transcript};

/// Maximum number of proofs that can be verified in a single batch.
const MAX_BATCH_SIZE: usize = 1000;

/// Entry in the batch verifier containing a decoded proof.
struct BatchEntry<G: GroupEngine> {
    statement: Statement<G>,
    decoded: Option<(G::Element, G::Scalar)>,
    context: Option<Vec<u8>>,
}

impl<G: GroupEngine> BatchEntry<G> {
    fn transcript(&self) -> Transcript {
        let mut transcript = Transcript::new();
        if let Some(context) = &self.context {
            transcript.append_context(context);
        }
        transcript
    }
}

/// Batch verifier for Schnorr proofs over one group.
///
/// # Capacity Limits
///
/// The batch verifier holds at most 1000 proofs. For larger workloads, split
/// into multiple batches.
pub struct BatchVerifier<G: GroupEngine> {
    group: G,
    entries: Vec<BatchEntry<G>>,
}

impl<G: GroupEngine> BatchVerifier<G> {
    /// Creates a new empty batch verifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schnorr_nizk::{BatchVerifier, Ristretto255};
    ///
    /// let batch = BatchVerifier::new(Ristretto255::new());
    /// assert!(batch.is_empty());
    /// ```
    #[must_use]
    pub fn new(group: G) -> Self {
        Self {
            group,
            entries: Vec::new(),
        }
    }

    /// Returns the number of proofs currently in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the batch contains no proofs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the remaining capacity before reaching the batch size limit.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        MAX_BATCH_SIZE.saturating_sub(self.entries.len())
    }

    /// Adds a proof to the batch.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParams`] if the batch is full
    /// - [`Error::InvalidStatement`] / [`Error::InvalidProof`] for malformed
    ///   input, exactly as [`Verifier::verify`](crate::Verifier::verify) would
    pub fn add(&mut self, statement: impl Into<Integer>, proof: &Proof) -> Result<()> {
        self.add_with_context(statement, proof, None)
    }

    /// Adds a proof bound to a transcript context.
    ///
    /// The context must match the one used during proof generation.
    pub fn add_with_context(
        &mut self,
        statement: impl Into<Integer>,
        proof: &Proof,
        context: Option<Vec<u8>>,
    ) -> Result<()> {
        if self.entries.len() >= MAX_BATCH_SIZE {
            return Err(Error::InvalidParams(format!(
                "Batch size limit exceeded (max {MAX_BATCH_SIZE})"
            )));
        }

        let statement = Statement::from_integer(&self.group, statement)?;
        let decoded = proof.decode(&self.group)?;

        self.entries.push(BatchEntry {
            statement,
            decoded,
            context,
        });

        Ok(())
    }

    /// Verifies all proofs in the batch.
    ///
    /// Returns one result per proof, in the order they were added.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParams`] if the batch is empty
    /// - [`Error::Engine`] if the random weights cannot be sampled
    pub fn verify<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<Vec<bool>> {
        if self.entries.is_empty() {
            return Err(Error::InvalidParams("Cannot verify empty batch".to_string()));
        }

        if self.entries.len() > 1
            && self.group.has_prime_order()
            && self.entries.iter().all(|entry| self.in_subgroup(entry))
            && self.verify_combined(rng)?
        {
            return Ok(vec![true; self.entries.len()]);
        }

        debug!(
            group = self.group.name(),
            proofs = self.entries.len(),
            "verifying batch individually"
        );
        Ok(self.entries.iter().map(|entry| self.verify_one(entry)).collect())
    }

    fn in_subgroup(&self, entry: &BatchEntry<G>) -> bool {
        let Some((commitment, _)) = &entry.decoded else {
            return false;
        };
        self.group.is_subgroup_member(commitment)
            && self.group.is_subgroup_member(entry.statement.element())
    }

    fn verify_one(&self, entry: &BatchEntry<G>) -> bool {
        let Some((commitment, response)) = &entry.decoded else {
            return false;
        };

        let challenge = entry
            .transcript()
            .challenge(&self.group, entry.statement.element(), commitment);
        let gs = self.group.power(response);
        let xc = self.group.power_of(entry.statement.element(), &challenge);

        *commitment == self.group.element_mul(&gs, &xc)
    }

    fn verify_combined<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<bool> {
        let group = &self.group;
        let mut lhs = group.identity();
        let mut rhs = group.identity();
        let mut exponent = group.scalar_from_integer(&0.into());

        for entry in &self.entries {
            let Some((commitment, response)) = &entry.decoded else {
                return Ok(false);
            };

            let alpha = group.random_exponent(rng)?;
            let challenge = entry
                .transcript()
                .challenge(group, entry.statement.element(), commitment);

            lhs = group.element_mul(&lhs, &group.power_of(commitment, &alpha));

            let alpha_s = group.scalar_mul(&alpha, response);
            exponent = group.scalar_add(&exponent, &alpha_s);

            let alpha_c = group.scalar_mul(&alpha, &challenge);
            rhs = group.element_mul(&rhs, &group.power_of(entry.statement.element(), &alpha_c));
        }

        rhs = group.element_mul(&rhs, &group.power(&exponent));
        Ok(lhs == rhs)
    }
}
