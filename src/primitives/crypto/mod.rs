/// Modular arithmetic primitives.
pub mod field;
/// Group engine trait.
pub mod group;
/// Cryptographically secure random number generation.
pub mod rng;

pub use group::GroupEngine;
pub use rng::SecureRng;
