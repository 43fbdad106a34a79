//! Modular arithmetic over arbitrary-precision integers.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Reduces a signed integer into the canonical range `[0, modulus)`.
///
/// The caller guarantees `modulus` is non-zero.
pub fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    let magnitude = value.magnitude() % modulus;
    match value.sign() {
        Sign::Minus if !magnitude.is_zero() => modulus - magnitude,
        _ => magnitude,
    }
}

/// Computes `(a + b) mod modulus`.
pub fn add_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a + b) % modulus
}

/// Computes `(a * b) mod modulus`.
pub fn mul_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b) % modulus
}

/// Computes `-a mod modulus`.
pub fn neg_mod(a: &BigUint, modulus: &BigUint) -> BigUint {
    let a = a % modulus;
    if a.is_zero() {
        a
    } else {
        modulus - a
    }
}

/// Returns `true` if `value` lies in `[1, modulus)`.
pub fn is_unit_residue(value: &BigUint, modulus: &BigUint) -> bool {
    value >= &BigUint::one() && value < modulus
}
