use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;
use num_traits::{Num, Zero};
use tracing::debug;

use crate::error::CurveError;

/// Miller-Rabin rounds used when checking the field modulus.
const PRIMALITY_ROUNDS: usize = 20;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b mod p`.
///
/// Equality and hashing look at `(a, b, p)` only. The name is a label and two
/// parameter sets that differ only by name are the same curve.
#[derive(Debug, Clone)]
pub struct CurveParameters {
    a: BigUint,
    b: BigUint,
    p: BigUint,
    name: String,
}

impl CurveParameters {
    /// Stores the given values as-is. Nothing is reduced or validated, see
    /// [`CurveParameters::checked`] for the validating constructor.
    pub fn new(a: BigUint, b: BigUint, p: BigUint, name: impl Into<String>) -> Self {
        Self {
            a,
            b,
            p,
            name: name.into(),
        }
    }

    pub fn unnamed(a: BigUint, b: BigUint, p: BigUint) -> Self {
        Self::new(a, b, p, String::new())
    }

    /// Like [`CurveParameters::new`] but rejects anything that is not a
    /// non-singular curve over a prime field.
    pub fn checked(
        a: BigUint,
        b: BigUint,
        p: BigUint,
        name: impl Into<String>,
    ) -> Result<Self, CurveError> {
        let curve = Self::new(a, b, p, name);
        curve.validate()?;
        Ok(curve)
    }

    /// Parses big-endian hex values, with or without a `0x` prefix.
    pub fn from_hex(a: &str, b: &str, p: &str, name: impl Into<String>) -> Result<Self, CurveError> {
        Ok(Self::new(
            parse_hex('a', a)?,
            parse_hex('b', b)?,
            parse_hex('p', p)?,
            name,
        ))
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_bits(&self) -> usize {
        self.p.bits()
    }

    /// Byte width of a big-endian encoded field element.
    pub fn field_bytes(&self) -> usize {
        (self.field_bits() + 7) / 8
    }

    /// `(4a^3 + 27b^2) mod p`, or `None` when `p` is zero.
    pub fn discriminant(&self) -> Option<BigUint> {
        if self.p.is_zero() {
            return None;
        }
        let a3 = self.a.modpow(&BigUint::from(3u32), &self.p);
        let b2 = self.b.modpow(&BigUint::from(2u32), &self.p);
        Some((BigUint::from(4u32) * a3 + BigUint::from(27u32) * b2) % &self.p)
    }

    /// Checks that the parameters describe a usable curve: `p > 3` and prime,
    /// `a` and `b` reduced modulo `p`, non-zero discriminant.
    pub fn validate(&self) -> Result<(), CurveError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(curve = %self, %err, "curve parameters rejected");
        }
        result
    }

    fn check(&self) -> Result<(), CurveError> {
        if self.p <= BigUint::from(3u32) {
            return Err(CurveError::ModulusTooSmall);
        }
        if !probably_prime(&self.p, PRIMALITY_ROUNDS) {
            return Err(CurveError::CompositeModulus);
        }
        if self.a >= self.p {
            return Err(CurveError::CoefficientOutOfRange { coefficient: 'a' });
        }
        if self.b >= self.p {
            return Err(CurveError::CoefficientOutOfRange { coefficient: 'b' });
        }
        match self.discriminant() {
            Some(d) if !d.is_zero() => Ok(()),
            _ => Err(CurveError::Singular),
        }
    }
}

impl PartialEq for CurveParameters {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.p == other.p
    }
}

impl Eq for CurveParameters {}

impl Hash for CurveParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
        self.p.hash(state);
    }
}

impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "<unnamed>"
        } else {
            &self.name
        };
        write!(f, "{} ({}-bit)", name, self.field_bits())
    }
}

fn parse_hex(field: char, value: &str) -> Result<BigUint, CurveError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let invalid = || CurveError::InvalidHex {
        field,
        value: value.to_string(),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    BigUint::from_str_radix(digits, 16).map_err(|_| invalid())
}

/// Upper-case hex without prefix.
pub fn to_hex(value: &BigUint) -> String {
    value.to_str_radix(16).to_uppercase()
}
