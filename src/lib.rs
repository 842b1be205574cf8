//! Domain parameters of standardized short Weierstrass curves (SEC 2 and
//! Brainpool), exposed as immutable [`CurveParameters`] values.

mod curve;
mod error;
mod registry;

pub use crate::curve::{to_hex, CurveParameters};
pub use crate::error::CurveError;
pub use crate::registry::{catalog, CurveId, Family};

pub use num_bigint_dig::BigUint;
