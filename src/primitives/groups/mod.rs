/// Prime-field multiplicative groups.
pub mod modp;
/// RFC 5114 MODP group (2048-bit modulus, 256-bit order).
pub mod rfc5114;
/// Ristretto255 group (prime-order elliptic curve).
pub mod ristretto;

pub use modp::ModpGroup;
pub use rfc5114::rfc5114;
pub use ristretto::Ristretto255;
