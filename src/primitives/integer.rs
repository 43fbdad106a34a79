//! Boundary representation of integers.
//!
//! Every exponent or element crossing the public API is an [`Integer`]: either
//! a native arbitrary-precision integer or a decimal string. Strings are kept
//! verbatim until they are used, so a malformed value is reported with the
//! error kind of the place it was used in (witness, statement or proof).

use core::fmt;

use num_bigint::{BigInt, BigUint};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An integer in one of its two accepted external encodings.
///
/// Equality compares values, not encodings: `Integer::from("08")` equals
/// `Integer::from(8u32)`. Malformed decimal strings are equal only to the
/// identical string.
#[derive(Clone, Debug)]
pub enum Integer {
    /// Native arbitrary-precision integer.
    Native(BigInt),
    /// Decimal string, not yet validated.
    Decimal(String),
}

impl Integer {
    /// Parses a decimal string: an optional `-` followed by ASCII digits.
    ///
    /// Leading zeros are accepted. Whitespace, a `+` sign and any other
    /// radix are rejected.
    pub fn parse_decimal(s: &str) -> Option<BigInt> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BigInt::parse_bytes(s.as_bytes(), 10)
    }

    /// Returns the value as a native integer, or `None` if the decimal string
    /// is malformed.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Native(value) => Some(value.clone()),
            Self::Decimal(s) => Self::parse_decimal(s),
        }
    }

    /// Returns the value as a non-negative native integer, or `None` if it is
    /// malformed or negative.
    pub fn to_biguint(&self) -> Option<BigUint> {
        self.to_bigint().and_then(|value| value.to_biguint())
    }

    /// Returns the canonical decimal encoding (no leading zeros), or `None` if
    /// the value is malformed.
    pub fn to_decimal(&self) -> Option<String> {
        self.to_bigint().map(|value| value.to_str_radix(10))
    }

    /// Returns `true` if the value is a well-formed integer.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Native(_) => true,
            Self::Decimal(s) => Self::parse_decimal(s).is_some(),
        }
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_bigint(), other.to_bigint()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (Self::Decimal(a), Self::Decimal(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Eq for Integer {}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(value) => write!(f, "{value}"),
            Self::Decimal(s) => f.write_str(s),
        }
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self::Native(value)
    }
}

impl From<BigUint> for Integer {
    fn from(value: BigUint) -> Self {
        Self::Native(BigInt::from(value))
    }
}

impl From<&BigUint> for Integer {
    fn from(value: &BigUint) -> Self {
        Self::Native(BigInt::from(value.clone()))
    }
}

impl From<String> for Integer {
    fn from(value: String) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Integer {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_string())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::Native(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Native(value) => serializer.serialize_str(&value.to_str_radix(10)),
            Self::Decimal(s) => serializer.serialize_str(s),
        }
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> core::result::Result<Integer, E> {
        Ok(Integer::Decimal(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> core::result::Result<Integer, E> {
        Ok(Integer::Decimal(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> core::result::Result<Integer, E> {
        Ok(Integer::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> core::result::Result<Integer, E> {
        Ok(Integer::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> core::result::Result<Integer, E> {
        Ok(Integer::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> core::result::Result<Integer, E> {
        Ok(Integer::from(v))
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntegerVisitor)
    }
}
