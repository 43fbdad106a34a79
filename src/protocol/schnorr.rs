use crate::{GroupEngine, Integer, ModpGroup, Proof, Prover, Result, SecureRng, Verifier};

/// Prover and verifier bundled over one group descriptor.
///
/// Nonces are drawn from a fresh [`SecureRng`] on every call.
///
/// # Examples
///
/// ```rust
/// use schnorr_nizk::Schnorr;
///
/// let schnorr = Schnorr::from_params("23", "5").unwrap();
/// let proof = schnorr.prove("6", None).unwrap();
/// assert!(schnorr.verify("8", &proof).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Schnorr<G: GroupEngine> {
    prover: Prover<G>,
    verifier: Verifier<G>,
}

impl<G: GroupEngine> Schnorr<G> {
    /// Creates a prover/verifier pair over `group`.
    pub fn new(group: G) -> Self {
        Self {
            prover: Prover::new(group.clone()),
            verifier: Verifier::new(group),
        }
    }

    /// Returns the underlying prover.
    pub fn prover(&self) -> &Prover<G> {
        &self.prover
    }

    /// Returns the underlying verifier.
    pub fn verifier(&self) -> &Verifier<G> {
        &self.verifier
    }

    /// Proves knowledge of `r` with `x = g^r`; see [`Prover::prove`].
    pub fn prove(&self, r: impl Into<Integer>, x: Option<Integer>) -> Result<Proof> {
        let mut rng = SecureRng::new();
        self.prover.prove(&mut rng, r, x)
    }

    /// Verifies `proof` for statement `x`; see [`Verifier::verify`].
    pub fn verify(&self, x: impl Into<Integer>, proof: &Proof) -> Result<bool> {
        self.verifier.verify(x, proof)
    }
}

impl Schnorr<ModpGroup> {
    /// Creates a prover/verifier pair over the multiplicative group modulo
    /// `p` generated by `g`, each given as a native integer or decimal string.
    pub fn from_params(p: impl Into<Integer>, g: impl Into<Integer>) -> Result<Self> {
        Ok(Self::new(ModpGroup::from_encoded(p, g, None)?))
    }
}
