use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use num_bigint::{BigInt, BigUint};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::primitives::crypto::field::reduce;
use crate::{Error, GroupEngine, Result};

/// Number of bytes in a Ristretto255 scalar or compressed element (32 bytes).
const RISTRETTO_BYTES: usize = 32;

/// Number of bytes used for wide scalar reduction (64 bytes).
const WIDE_REDUCTION_BYTES: usize = 64;

/// Prime order ℓ = 2^252 + 27742317777372353535851937790883648493.
const GROUP_ORDER: &str =
    "7237005577332262213973186563042994240857116359379907606001950938285454250989";

/// Field modulus 2^255 - 19.
const FIELD_MODULUS: &str =
    "57896044618658097711785492504343953926634992332820282019728792003956564819949";

/// Ristretto255 prime-order group.
///
/// Elements are exchanged as the little-endian integer value of their
/// canonical 32-byte compression, which is always below 2^255 - 19.
#[derive(Clone, Debug)]
pub struct Ristretto255 {
    order: BigUint,
    modulus: BigUint,
}

impl Ristretto255 {
    /// Creates the Ristretto255 group descriptor.
    pub fn new() -> Self {
        Self {
            order: decode_decimal(GROUP_ORDER),
            modulus: decode_decimal(FIELD_MODULUS),
        }
    }
}

impl Default for Ristretto255 {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_decimal(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10)
        .unwrap_or_else(|| unreachable!("Ristretto255 constants are valid decimals"))
}

fn to_fixed_le(value: &BigUint) -> Option<[u8; RISTRETTO_BYTES]> {
    let bytes = value.to_bytes_le();
    if bytes.len() > RISTRETTO_BYTES {
        return None;
    }
    let mut arr = [0u8; RISTRETTO_BYTES];
    arr[..bytes.len()].copy_from_slice(&bytes);
    Some(arr)
}

impl GroupEngine for Ristretto255 {
    type Scalar = Scalar;
    type Element = RistrettoPoint;

    fn name(&self) -> &str {
        "Ristretto255"
    }

    fn generator(&self) -> Self::Element {
        RISTRETTO_BASEPOINT_POINT
    }

    fn modulus(&self) -> BigUint {
        self.modulus.clone()
    }

    fn order(&self) -> BigUint {
        self.order.clone()
    }

    fn power(&self, e: &Self::Scalar) -> Self::Element {
        RistrettoPoint::mul_base(e)
    }

    fn power_of(&self, base: &Self::Element, e: &Self::Scalar) -> Self::Element {
        base * e
    }

    fn element_mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn identity(&self) -> Self::Element {
        RistrettoPoint::identity()
    }

    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        a + b
    }

    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        a * b
    }

    fn scalar_negate(&self, s: &Self::Scalar) -> Self::Scalar {
        -s
    }

    fn random_exponent<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<Self::Scalar> {
        let mut buf = [0u8; WIDE_REDUCTION_BYTES];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::Engine(format!("entropy source failed: {e}")))?;

        let scalar = Scalar::from_bytes_mod_order_wide(&buf);
        buf.zeroize();
        Ok(scalar)
    }

    fn scalar_from_integer(&self, value: &BigInt) -> Self::Scalar {
        let reduced = reduce(value, &self.order);
        let arr = to_fixed_le(&reduced)
            .unwrap_or_else(|| unreachable!("values below the group order fit in 32 bytes"));
        Scalar::from_bytes_mod_order(arr)
    }

    fn scalar_to_integer(&self, s: &Self::Scalar) -> BigUint {
        BigUint::from_bytes_le(s.as_bytes())
    }

    fn element_from_integer(&self, value: &BigUint) -> Option<Self::Element> {
        let arr = to_fixed_le(value)?;
        CompressedRistretto(arr).decompress()
    }

    fn element_to_integer(&self, e: &Self::Element) -> BigUint {
        BigUint::from_bytes_le(e.compress().as_bytes())
    }

    fn has_prime_order(&self) -> bool {
        true
    }

    // Ristretto255 is a prime-order group.
    fn is_subgroup_member(&self, _e: &Self::Element) -> bool {
        true
    }
}
