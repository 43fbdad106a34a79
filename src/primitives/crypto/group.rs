use core::fmt::Debug;

use num_bigint::{BigInt, BigUint};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::Result;

/// Capability interface of a cyclic group used by the Schnorr protocol.
///
/// An engine is a group descriptor supplied by the caller: it fixes the
/// generator `g`, the modulus of the underlying field and the order `q` of the
/// subgroup generated by `g`. The prover and verifier only ever talk to the
/// group through this trait, so a prime-field multiplicative group and an
/// elliptic-curve group are interchangeable.
///
/// Group-element combination ([`element_mul`](Self::element_mul)) and exponent
/// combination ([`scalar_add`](Self::scalar_add),
/// [`scalar_mul`](Self::scalar_mul)) are deliberately separate operations.
///
/// The engine is trusted: implementations are not required to check that
/// their parameters describe a secure group.
pub trait GroupEngine: Clone + Debug + Send + Sync + 'static {
    /// Exponent type, an integer modulo [`order`](Self::order).
    ///
    /// Scalars must be zeroizable because witnesses and nonces are scalars.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;

    /// Group element type.
    type Element: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Returns a human-readable name of the group.
    fn name(&self) -> &str;

    /// Returns the generator `g`.
    fn generator(&self) -> Self::Element;

    /// Returns the modulus `p` of the underlying field.
    fn modulus(&self) -> BigUint;

    /// Returns the order `q` of the subgroup generated by `g`.
    fn order(&self) -> BigUint;

    /// Computes `g^e`.
    fn power(&self, e: &Self::Scalar) -> Self::Element;

    /// Computes `base^e` for an arbitrary element `base`.
    fn power_of(&self, base: &Self::Element, e: &Self::Scalar) -> Self::Element;

    /// Combines two elements under the group law.
    fn element_mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns the identity element.
    fn identity(&self) -> Self::Element;

    /// Adds two exponents modulo the order.
    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplies two exponents modulo the order.
    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Negates an exponent modulo the order.
    fn scalar_negate(&self, s: &Self::Scalar) -> Self::Scalar;

    /// Samples a uniformly random exponent in `[0, order)`.
    ///
    /// This is the only operation that consumes entropy. A failing random
    /// source is reported as [`Error::Engine`](crate::Error::Engine); the
    /// engine never retries.
    fn random_exponent<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<Self::Scalar>;

    /// Maps any integer into an exponent by reducing it modulo the order.
    fn scalar_from_integer(&self, value: &BigInt) -> Self::Scalar;

    /// Returns the canonical integer in `[0, order)` of an exponent.
    fn scalar_to_integer(&self, s: &Self::Scalar) -> BigUint;

    /// Decodes an element from its canonical integer form.
    ///
    /// Returns `None` if the integer does not encode an element of the group.
    fn element_from_integer(&self, value: &BigUint) -> Option<Self::Element>;

    /// Returns the canonical integer form of an element.
    fn element_to_integer(&self, e: &Self::Element) -> BigUint;

    /// Returns `true` if [`order`](Self::order) is prime.
    ///
    /// For caller-supplied parameters this is trusted, not proven.
    fn has_prime_order(&self) -> bool;

    /// Returns `true` if `e` lies in the subgroup generated by `g`, i.e.
    /// `e^order` is the identity.
    ///
    /// [`element_from_integer`](Self::element_from_integer) may accept
    /// elements outside that subgroup; combined checks that raise elements to
    /// random exponents are only exact for members.
    fn is_subgroup_member(&self, e: &Self::Element) -> bool;

    /// Number of decimal digits every element is padded to in the transcript.
    fn encoding_width(&self) -> usize {
        self.modulus().to_str_radix(10).len()
    }
}
