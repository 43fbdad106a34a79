//! Error types for Schnorr proofs

/// Main error types for the library.
///
/// A proof that simply does not verify is not an error: verification returns
/// `Ok(false)` for any cryptographic mismatch. These variants cover malformed
/// input and failures of the group engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The secret exponent is missing, non-numeric, or otherwise unusable.
    #[error("Invalid witness: {0}")]
    InvalidWitness(String),

    /// The public value is non-numeric or cannot be decoded as a group element.
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    /// A received proof has fields that do not parse as integers.
    #[error("Invalid proof: {0}")]
    InvalidProof(String),

    /// Invalid group parameters (or batch limits) were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// The group engine could not produce a value (e.g. entropy unavailable).
    #[error("Group engine failure: {0}")]
    Engine(String),
}
