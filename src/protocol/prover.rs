use core::fmt;

use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{GroupEngine, Integer, Proof, Result, Statement, Transcript, Witness};

/// Prover for the Schnorr proof of knowledge of a discrete logarithm.
///
/// Generates proofs that the prover knows `r` such that `x = g^r` without
/// revealing `r`. A prover holds only the group descriptor: witnesses are
/// passed per call and nonces live only inside that call.
///
/// # Security
///
/// - Use [`SecureRng`](crate::SecureRng) (or another CSPRNG) for nonces; a
///   nonce reused under the same witness reveals the witness
/// - Bind proofs to a session with [`Transcript::append_context`] when they
///   could otherwise be replayed
#[derive(Clone, Debug)]
pub struct Prover<G: GroupEngine> {
    group: G,
}

impl<G: GroupEngine> Prover<G> {
    /// Creates a new prover over the given group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schnorr_nizk::{ModpGroup, Prover};
    ///
    /// let group = ModpGroup::from_encoded("23", "5", None).unwrap();
    /// let prover = Prover::new(group);
    /// ```
    pub fn new(group: G) -> Self {
        Self { group }
    }

    /// Returns the group descriptor.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Generates a non-interactive proof for witness `r`.
    ///
    /// Both arguments accept a native integer or a decimal string. When
    /// `statement` is `None` it is computed as `g^r`; when supplied it is
    /// trusted to equal `g^r`, otherwise the proof will not verify.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWitness`] if `r` is not a well-formed integer
    /// - [`Error::InvalidStatement`] if `statement` cannot be decoded
    /// - [`Error::Engine`] if the nonce cannot be sampled
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schnorr_nizk::{ModpGroup, Prover, SecureRng};
    ///
    /// let group = ModpGroup::from_encoded("23", "5", None).unwrap();
    /// let prover = Prover::new(group);
    /// let mut rng = SecureRng::new();
    ///
    /// let proof = prover.prove(&mut rng, "6", Some("8".into())).unwrap();
    /// ```
    pub fn prove<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        witness: impl Into<Integer>,
        statement: Option<Integer>,
    ) -> Result<Proof> {
        self.prove_with_transcript(rng, witness, statement, Transcript::new())
    }

    /// Generates a proof using a caller-seeded transcript.
    ///
    /// The verifier must seed its transcript with the same context.
    pub fn prove_with_transcript<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        witness: impl Into<Integer>,
        statement: Option<Integer>,
        transcript: Transcript,
    ) -> Result<Proof> {
        let witness = Witness::from_integer(&self.group, witness)?;
        let statement = match statement {
            Some(value) => Statement::from_integer(&self.group, value)?,
            None => Statement::from_witness(&self.group, &witness),
        };

        self.prove_statement(rng, &witness, &statement, transcript)
    }

    /// Generates a proof from already decoded values.
    pub fn prove_statement<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        witness: &Witness<G>,
        statement: &Statement<G>,
        transcript: Transcript,
    ) -> Result<Proof> {
        let (commitment, nonce) = self.commit(rng)?;
        let challenge = transcript.challenge(&self.group, statement.element(), &commitment);
        let response = self.respond(nonce, &challenge, witness);

        debug!(group = self.group.name(), "generated Schnorr proof");

        Ok(Proof::new(
            self.group.element_to_integer(&commitment),
            self.group.scalar_to_integer(&response),
        ))
    }

    /// Interactive protocol: generates the commitment `t = g^k` (first message).
    ///
    /// Returns the commitment and the secret nonce, which must be kept secret
    /// and passed to [`respond`](Self::respond) exactly once.
    pub fn commit<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(G::Element, Nonce<G>)> {
        let k = self.group.random_exponent(rng)?;
        let t = self.group.power(&k);
        Ok((t, Nonce::new(k)))
    }

    /// Interactive protocol: computes the response `s = k - c*r mod q`
    /// (third message).
    ///
    /// The nonce is consumed so it cannot answer a second challenge.
    pub fn respond(
        &self,
        nonce: Nonce<G>,
        challenge: &G::Scalar,
        witness: &Witness<G>,
    ) -> G::Scalar {
        let cr = self.group.scalar_mul(challenge, witness.secret());
        self.group.scalar_add(nonce.k(), &self.group.scalar_negate(&cr))
    }
}

/// Secret nonce `k` used in the commitment phase.
///
/// Automatically zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Nonce<G: GroupEngine> {
    k: G::Scalar,
}

impl<G: GroupEngine> Nonce<G> {
    fn new(k: G::Scalar) -> Self {
        Self { k }
    }

    fn k(&self) -> &G::Scalar {
        &self.k
    }
}

impl<G: GroupEngine> fmt::Debug for Nonce<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce(<redacted>)")
    }
}
