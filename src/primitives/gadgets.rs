//! Protocol gadgets for Schnorr proofs of knowledge.
//!
//! This module contains the data structures exchanged by the protocol:
//! witness, statement and proof.

use core::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, GroupEngine, Integer, Result};

/// Secret witness: the discrete logarithm `r` of the statement.
///
/// # Security
///
/// - The witness is zeroized when dropped
/// - It never appears in `Debug` output and is never part of a [`Proof`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Witness<G: GroupEngine> {
    r: G::Scalar,
}

impl<G: GroupEngine> Witness<G> {
    /// Creates a witness from an exponent.
    pub fn new(r: G::Scalar) -> Self {
        Self { r }
    }

    /// Parses a witness from either external encoding.
    ///
    /// Any integer is accepted, including negative values; it is normalized
    /// into `[0, order)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWitness`] if the value is not a well-formed
    /// integer.
    pub fn from_integer(group: &G, value: impl Into<Integer>) -> Result<Self> {
        let value = value
            .into()
            .to_bigint()
            .ok_or_else(|| Error::InvalidWitness("witness is not a decimal integer".to_string()))?;
        Ok(Self::new(group.scalar_from_integer(&value)))
    }

    /// Returns a reference to the secret exponent.
    pub(crate) fn secret(&self) -> &G::Scalar {
        &self.r
    }
}

impl<G: GroupEngine> fmt::Debug for Witness<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Witness(<redacted>)")
    }
}

/// Public statement `x = g^r`.
#[derive(Clone, Debug)]
pub struct Statement<G: GroupEngine> {
    x: G::Element,
}

impl<G: GroupEngine> PartialEq for Statement<G> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl<G: GroupEngine> Eq for Statement<G> {}

impl<G: GroupEngine> Statement<G> {
    /// Creates a statement from a group element.
    pub fn new(x: G::Element) -> Self {
        Self { x }
    }

    /// Computes the statement `x = g^r` from a witness.
    pub fn from_witness(group: &G, witness: &Witness<G>) -> Self {
        Self {
            x: group.power(witness.secret()),
        }
    }

    /// Parses a statement from either external encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatement`] if the value is not a non-negative
    /// integer or does not encode an element of the group.
    pub fn from_integer(group: &G, value: impl Into<Integer>) -> Result<Self> {
        let value = value.into().to_biguint().ok_or_else(|| {
            Error::InvalidStatement("statement is not a non-negative decimal integer".to_string())
        })?;
        let x = group.element_from_integer(&value).ok_or_else(|| {
            Error::InvalidStatement(format!("statement is not an element of {}", group.name()))
        })?;
        Ok(Self { x })
    }

    /// Returns the public element `x`.
    pub fn element(&self) -> &G::Element {
        &self.x
    }

    /// Returns the statement in its integer encoding.
    pub fn to_integer(&self, group: &G) -> Integer {
        Integer::from(group.element_to_integer(&self.x))
    }
}

/// Non-interactive Schnorr proof `{commitment, response}`.
///
/// `commitment` is the group element `t = g^k` and `response` is the exponent
/// `s = k - c*r mod q`. Both are carried as [`Integer`]s and serialize as
/// decimal strings:
///
/// ```json
/// { "commitment": "10", "response": "3" }
/// ```
///
/// Fields are validated when the proof is verified, not when it is
/// deserialized, so a malformed field is reported as
/// [`Error::InvalidProof`] by the verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    commitment: Integer,
    response: Integer,
}

impl Proof {
    /// Creates a proof from its two fields.
    pub fn new(commitment: impl Into<Integer>, response: impl Into<Integer>) -> Self {
        Self {
            commitment: commitment.into(),
            response: response.into(),
        }
    }

    /// Returns the commitment `t`.
    pub fn commitment(&self) -> &Integer {
        &self.commitment
    }

    /// Returns the response `s`.
    pub fn response(&self) -> &Integer {
        &self.response
    }

    /// Serializes the proof to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidProof(e.to_string()))
    }

    /// Deserializes a proof from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProof`] if the input is not a JSON object with
    /// `commitment` and `response` fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidProof(e.to_string()))
    }

    /// Decodes both fields into group values.
    ///
    /// Returns `Ok(None)` when the commitment is a well-formed integer that is
    /// not an element of the group: no honest proof can carry it, so it is a
    /// verification failure rather than a malformed input.
    pub(crate) fn decode<G: GroupEngine>(
        &self,
        group: &G,
    ) -> Result<Option<(G::Element, G::Scalar)>> {
        let commitment = self.commitment.to_bigint().ok_or_else(|| {
            Error::InvalidProof("commitment is not a decimal integer".to_string())
        })?;
        let commitment = commitment
            .to_biguint()
            .ok_or_else(|| Error::InvalidProof("commitment is negative".to_string()))?;
        let response = self
            .response
            .to_bigint()
            .ok_or_else(|| Error::InvalidProof("response is not a decimal integer".to_string()))?;

        Ok(group
            .element_from_integer(&commitment)
            .map(|t| (t, group.scalar_from_integer(&response))))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::ModpGroup;

    fn toy() -> ModpGroup {
        ModpGroup::new(BigUint::from(23u32), BigUint::from(5u32), None).unwrap()
    }

    #[test]
    fn statement_from_witness() {
        let group = toy();
        let witness = Witness::from_integer(&group, 6u32).unwrap();
        let statement = Statement::from_witness(&group, &witness);
        assert_eq!(statement.to_integer(&group), Integer::from(8u32));
    }

    #[test]
    fn witness_accepts_both_encodings_and_signs() {
        let group = toy();
        let native = Witness::from_integer(&group, 6u32).unwrap();
        let decimal = Witness::from_integer(&group, "6").unwrap();
        let negative = Witness::from_integer(&group, -16i32).unwrap();
        assert_eq!(native.secret(), decimal.secret());
        assert_eq!(native.secret(), negative.secret());
    }

    #[test]
    fn witness_rejects_malformed() {
        let group = toy();
        let err = Witness::from_integer(&group, "six").unwrap_err();
        assert!(matches!(err, Error::InvalidWitness(_)));
    }

    #[test]
    fn witness_debug_is_redacted() {
        let group = toy();
        let witness = Witness::from_integer(&group, 6u32).unwrap();
        assert_eq!(format!("{witness:?}"), "Witness(<redacted>)");
    }

    #[test]
    fn statement_rejects_malformed_and_out_of_range() {
        let group = toy();
        for value in [Integer::from("x"), Integer::from(-8i32), Integer::from(0u32), Integer::from(23u32)] {
            let err = Statement::from_integer(&group, value).unwrap_err();
            assert!(matches!(err, Error::InvalidStatement(_)));
        }
    }

    #[test]
    fn proof_json_wire_form() {
        let proof = Proof::new(10u32, 3u32);
        let json = proof.to_json().unwrap();
        assert_eq!(json, r#"{"commitment":"10","response":"3"}"#);

        let parsed = Proof::from_json(&json).unwrap();
        assert_eq!(parsed, proof);
    }

    #[test]
    fn proof_from_json_rejects_missing_fields() {
        let err = Proof::from_json(r#"{"commitment":"10"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));
    }

    #[test]
    fn decode_distinguishes_malformed_from_non_member() {
        let group = toy();

        let err = Proof::new("ten", 3u32).decode(&group).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));

        let err = Proof::new(10u32, "3.5").decode(&group).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));

        let err = Proof::new(-10i32, 3u32).decode(&group).unwrap_err();
        assert!(matches!(err, Error::InvalidProof(_)));

        assert!(Proof::new(23u32, 3u32).decode(&group).unwrap().is_none());
        assert!(Proof::new(10u32, -3i32).decode(&group).unwrap().is_some());
    }
}
