use tracing::{debug, trace};

use crate::{GroupEngine, Integer, Proof, Result, Statement, Transcript};

/// Verifier for the Schnorr proof of knowledge of a discrete logarithm.
///
/// Checks `t == g^s * x^c` where `c` is recomputed from `(g, x, t)`.
/// Verification is pure: it draws no randomness and keeps no state, so a
/// single verifier can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct Verifier<G: GroupEngine> {
    group: G,
}

impl<G: GroupEngine> Verifier<G> {
    /// Creates a new verifier over the given group.
    pub fn new(group: G) -> Self {
        Self { group }
    }

    /// Returns the group descriptor.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Verifies a non-interactive proof for `statement`.
    ///
    /// Returns `Ok(true)` if the proof is valid and `Ok(false)` for any
    /// cryptographic mismatch.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStatement`](crate::Error::InvalidStatement) if the
    ///   statement cannot be decoded
    /// - [`Error::InvalidProof`](crate::Error::InvalidProof) if a proof field
    ///   is not a well-formed integer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schnorr_nizk::{ModpGroup, Prover, SecureRng, Verifier};
    ///
    /// let group = ModpGroup::from_encoded("23", "5", None).unwrap();
    /// let mut rng = SecureRng::new();
    /// let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, None).unwrap();
    ///
    /// let verifier = Verifier::new(group);
    /// assert!(verifier.verify("8", &proof).unwrap());
    /// ```
    pub fn verify(&self, statement: impl Into<Integer>, proof: &Proof) -> Result<bool> {
        self.verify_with_transcript(statement, proof, Transcript::new())
    }

    /// Verifies a proof using a caller-seeded transcript.
    ///
    /// The transcript must carry the same context that was used during proof
    /// generation; a mismatched context makes verification return `false`.
    pub fn verify_with_transcript(
        &self,
        statement: impl Into<Integer>,
        proof: &Proof,
        transcript: Transcript,
    ) -> Result<bool> {
        let statement = Statement::from_integer(&self.group, statement)?;
        self.verify_statement(&statement, proof, transcript)
    }

    /// Verifies a proof against an already decoded statement.
    pub fn verify_statement(
        &self,
        statement: &Statement<G>,
        proof: &Proof,
        transcript: Transcript,
    ) -> Result<bool> {
        let Some((commitment, response)) = proof.decode(&self.group)? else {
            trace!(group = self.group.name(), "commitment is not a group element");
            return Ok(false);
        };

        let challenge = transcript.challenge(&self.group, statement.element(), &commitment);
        let valid = self.verify_response(statement, &commitment, &challenge, &response);

        debug!(group = self.group.name(), valid, "verified Schnorr proof");
        Ok(valid)
    }

    /// Interactive protocol: checks the response against a given challenge.
    ///
    /// Returns `true` iff `commitment == g^response * statement^challenge`.
    pub fn verify_response(
        &self,
        statement: &Statement<G>,
        commitment: &G::Element,
        challenge: &G::Scalar,
        response: &G::Scalar,
    ) -> bool {
        let gs = self.group.power(response);
        let xc = self.group.power_of(statement.element(), challenge);
        let expected = self.group.element_mul(&gs, &xc);

        *commitment == expected
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};

    use super::*;
    use crate::{Error, ModpGroup, Prover, SecureRng, Witness};

    fn toy() -> ModpGroup {
        ModpGroup::new(BigUint::from(23u32), BigUint::from(5u32), None).unwrap()
    }

    fn bump(value: &Integer) -> Integer {
        Integer::from(value.to_bigint().unwrap() + 1)
    }

    #[test]
    fn verifier_accepts_valid_proof() {
        let group = toy();
        let mut rng = SecureRng::new();
        let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, Some(8u32.into())).unwrap();

        let verifier = Verifier::new(group);
        assert!(verifier.verify(8u32, &proof).unwrap());
        assert!(verifier.verify("8", &proof).unwrap());
    }

    #[test]
    fn verifier_rejects_tampered_response() {
        let group = toy();
        let mut rng = SecureRng::new();
        let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, None).unwrap();

        let tampered = Proof::new(proof.commitment().clone(), bump(proof.response()));
        assert!(!Verifier::new(group).verify(8u32, &tampered).unwrap());
    }

    #[test]
    fn verifier_rejects_wrong_statement() {
        let group = crate::rfc5114();
        let mut rng = SecureRng::new();
        let proof = Prover::new(group.clone()).prove(&mut rng, 6u32, None).unwrap();

        let other = Statement::from_witness(&group, &Witness::from_integer(&group, 7u32).unwrap());
        let verifier = Verifier::new(group.clone());
        assert!(!verifier.verify(other.to_integer(&group), &proof).unwrap());
    }

    #[test]
    fn non_member_commitment_is_a_mismatch() {
        let verifier = Verifier::new(toy());
        assert!(!verifier.verify(8u32, &Proof::new(0u32, 1u32)).unwrap());
        assert!(!verifier.verify(8u32, &Proof::new(1000u32, 1u32)).unwrap());
    }

    #[test]
    fn malformed_fields_are_errors() {
        let verifier = Verifier::new(toy());

        let err = verifier.verify(8u32, &Proof::new(10u32, "abc")).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));

        let err = verifier.verify(8u32, &Proof::new("", 3u32)).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));

        let err = verifier.verify("eight", &Proof::new(10u32, 3u32)).unwrap_err();
        assert!(matches!(err, Error::InvalidStatement(_)));
    }

    #[test]
    fn interactive_verification() {
        let group = toy();
        let prover = Prover::new(group.clone());
        let mut rng = SecureRng::new();
        let witness = Witness::from_integer(&group, 6u32).unwrap();
        let statement = Statement::from_witness(&group, &witness);

        let (commitment, nonce) = prover.commit(&mut rng).unwrap();
        let challenge = group.scalar_from_integer(&BigInt::from(13));
        let response = prover.respond(nonce, &challenge, &witness);

        let verifier = Verifier::new(group);
        assert!(verifier.verify_response(&statement, &commitment, &challenge, &response));
    }
}
