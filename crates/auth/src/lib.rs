//! `stockroom-auth` — bearer-token authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! decoding, signature checks, and deterministic claim validation live here;
//! header plumbing lives in the API layer.

pub mod claims;
pub mod jwt;
pub mod principal;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use principal::PrincipalId;
