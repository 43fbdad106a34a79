use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::primitives::crypto::field::{add_mod, is_unit_residue, mul_mod, neg_mod, reduce};
use crate::{Error, GroupEngine, Integer, Result};

/// Extra random bits drawn beyond the order's bit length so that reducing
/// modulo the order is statistically uniform.
const EXTRA_SECURITY_BITS: usize = 128;

/// Multiplicative group of integers modulo a prime `p`, restricted to the
/// cyclic subgroup generated by `g`.
///
/// The descriptor is trusted: construction only rejects parameters that
/// would make the arithmetic itself ill-defined.
#[derive(Clone, Debug)]
pub struct ModpGroup {
    name: String,
    p: BigUint,
    g: BigUint,
    q: BigUint,
    prime_order: bool,
}

/// Exponent modulo the subgroup order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scalar(BigUint);

/// Residue in `[1, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element(BigUint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0 = BigUint::zero();
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Scalar {
    /// Returns a reference to the inner integer.
    pub fn inner(&self) -> &BigUint {
        &self.0
    }
}

impl Element {
    /// Returns a reference to the inner integer.
    pub fn inner(&self) -> &BigUint {
        &self.0
    }
}

impl ModpGroup {
    /// Creates a group descriptor from modulus `p`, generator `g` and an
    /// optional subgroup order `q`.
    ///
    /// When `q` is omitted the order of the full multiplicative group,
    /// `p - 1`, is used; every element's order divides it, so the protocol
    /// stays correct for any generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if `p` is not an odd integer above 2,
    /// `g` is not in `(1, p)`, or `q` is zero.
    pub fn new(p: BigUint, g: BigUint, q: Option<BigUint>) -> Result<Self> {
        if p <= BigUint::from(2u32) || !p.bit(0) {
            return Err(Error::InvalidParams(
                "modulus must be an odd integer greater than 2".to_string(),
            ));
        }

        if g <= BigUint::one() || g >= p {
            return Err(Error::InvalidParams(
                "generator must lie strictly between 1 and the modulus".to_string(),
            ));
        }

        // An explicit odd order is trusted to be prime; p - 1 never is (p > 3).
        let prime_order = q.as_ref().is_some_and(|q| q.bit(0) || *q == BigUint::from(2u32));
        let q = q.unwrap_or_else(|| &p - 1u32);
        if q.is_zero() {
            return Err(Error::InvalidParams("group order cannot be zero".to_string()));
        }

        Ok(Self {
            name: format!("MODP-{}", p.bits()),
            p,
            g,
            q,
            prime_order,
        })
    }

    /// Creates a group descriptor from externally encoded parameters.
    ///
    /// Each parameter may be a native integer or a decimal string.
    pub fn from_encoded(
        p: impl Into<Integer>,
        g: impl Into<Integer>,
        q: Option<Integer>,
    ) -> Result<Self> {
        let p = decode_param(p.into(), "modulus")?;
        let g = decode_param(g.into(), "generator")?;
        let q = q.map(|q| decode_param(q, "order")).transpose()?;
        Self::new(p, g, q)
    }

    /// Overrides the human-readable group name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

fn decode_param(value: Integer, what: &str) -> Result<BigUint> {
    value
        .to_biguint()
        .ok_or_else(|| Error::InvalidParams(format!("{what} is not a non-negative integer")))
}

impl GroupEngine for ModpGroup {
    type Scalar = Scalar;
    type Element = Element;

    fn name(&self) -> &str {
        &self.name
    }

    fn generator(&self) -> Self::Element {
        Element(self.g.clone())
    }

    fn modulus(&self) -> BigUint {
        self.p.clone()
    }

    fn order(&self) -> BigUint {
        self.q.clone()
    }

    fn power(&self, e: &Self::Scalar) -> Self::Element {
        Element(self.g.modpow(&e.0, &self.p))
    }

    fn power_of(&self, base: &Self::Element, e: &Self::Scalar) -> Self::Element {
        Element(base.0.modpow(&e.0, &self.p))
    }

    fn element_mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(mul_mod(&a.0, &b.0, &self.p))
    }

    fn identity(&self) -> Self::Element {
        Element(BigUint::one())
    }

    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(add_mod(&a.0, &b.0, &self.q))
    }

    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(mul_mod(&a.0, &b.0, &self.q))
    }

    fn scalar_negate(&self, s: &Self::Scalar) -> Self::Scalar {
        Scalar(neg_mod(&s.0, &self.q))
    }

    fn random_exponent<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<Self::Scalar> {
        let byte_len = (self.q.bits() as usize + EXTRA_SECURITY_BITS).div_ceil(8);
        let mut buf = vec![0u8; byte_len];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::Engine(format!("entropy source failed: {e}")))?;

        let value = BigUint::from_bytes_be(&buf) % &self.q;
        buf.zeroize();
        Ok(Scalar(value))
    }

    fn scalar_from_integer(&self, value: &BigInt) -> Self::Scalar {
        Scalar(reduce(value, &self.q))
    }

    fn scalar_to_integer(&self, s: &Self::Scalar) -> BigUint {
        s.0.clone()
    }

    fn element_from_integer(&self, value: &BigUint) -> Option<Self::Element> {
        is_unit_residue(value, &self.p).then(|| Element(value.clone()))
    }

    fn element_to_integer(&self, e: &Self::Element) -> BigUint {
        e.0.clone()
    }

    fn has_prime_order(&self) -> bool {
        self.prime_order
    }

    fn is_subgroup_member(&self, e: &Self::Element) -> bool {
        e.0.modpow(&self.q, &self.p).is_one()
    }
}
