//! Random sampling of exact decimal values
//!
//! Sampled values are carried as decimal digit strings rather than binary
//! floats, so the generated files hold exactly the requested number of
//! digits and reproduce bit-for-bit across platforms.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An exactly representable decimal scalar: +/- 0.d1..dn x 10^exponent.
///
/// An empty mantissa is the distinguished exact-zero value, printed as `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalValue {
    pub negative: bool,
    pub mantissa: String,
    pub exponent: i32,
}

impl DecimalValue {
    /// The exact-zero value
    pub fn zero() -> Self {
        DecimalValue {
            negative: false,
            mantissa: String::new(),
            exponent: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_empty()
    }

    /// Number of mantissa digits (0 for the zero value)
    pub fn ndigits(&self) -> usize {
        self.mantissa.len()
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}0.{}e{:+}", sign, self.mantissa, self.exponent)
    }
}

/// Sample a positive value in [1e-power, 1e+power)
pub fn random_positive(rng: &mut impl Rng, power: i32, ndigits: usize) -> DecimalValue {
    DecimalValue {
        negative: false,
        mantissa: random_mantissa(rng, ndigits),
        exponent: random_exponent(rng, power),
    }
}

/// Sample a signed value with magnitude below 1e+power
pub fn random_signed(rng: &mut impl Rng, power: i32, ndigits: usize) -> DecimalValue {
    DecimalValue {
        negative: rng.gen_bool(0.5),
        mantissa: random_mantissa(rng, ndigits),
        exponent: random_exponent(rng, power),
    }
}

/// Draw `ndigits` decimal digits; the leading digit is nonzero so the
/// mantissa is always normalized.
fn random_mantissa(rng: &mut impl Rng, ndigits: usize) -> String {
    let mut digits = String::with_capacity(ndigits);
    digits.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..ndigits {
        digits.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    digits
}

/// Uniform exponent keeping 0.mantissa x 10^e within [1e-power, 1e+power).
/// A power of zero pins the exponent, since the range would be empty.
fn random_exponent(rng: &mut impl Rng, power: i32) -> i32 {
    if power <= 0 {
        0
    } else {
        rng.gen_range(1 - power..=power)
    }
}
