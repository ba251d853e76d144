//! Basis-function and test-case records
//!
//! A test case holds two Gaussian orbital centers and a point nucleus; the
//! downstream harness interprets the three positions in exactly that order.

use crate::config::GeneratorParams;
use crate::randomgen::{random_positive, random_signed, DecimalValue};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A primitive Gaussian basis function: angular momentum (l, m, n), center
/// coordinates, and exponent. Immutable once sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisFunction {
    pub l: u32,
    pub m: u32,
    pub n: u32,
    pub center: [DecimalValue; 3],
    pub alpha: DecimalValue,
}

impl BasisFunction {
    /// Draw a randomized basis function within the configured bounds.
    pub fn sample(rng: &mut impl Rng, params: &GeneratorParams) -> Self {
        let l = rng.gen_range(0..=params.max_am);
        let m = rng.gen_range(0..=params.max_am);
        let n = rng.gen_range(0..=params.max_am);
        let center = [
            random_signed(rng, params.xyz_power, params.ndigits),
            random_signed(rng, params.xyz_power, params.ndigits),
            random_signed(rng, params.xyz_power, params.ndigits),
        ];
        let alpha = random_positive(rng, params.alpha_power, params.ndigits);
        BasisFunction {
            l,
            m,
            n,
            center,
            alpha,
        }
    }
}

/// A point charge at a sampled location. Angular momentum is pinned to
/// (0, 0, 0) and the exponent to exact zero; only the coordinates of the
/// originating draw survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nucleus {
    pub center: [DecimalValue; 3],
}

impl Nucleus {
    /// Build a nucleus from a full basis-function draw, discarding its
    /// angular momentum and exponent. A complete draw is consumed so the
    /// RNG stream stays aligned with the two orbital centers, keeping
    /// existing fixtures reproducible.
    pub fn from_draw(draw: BasisFunction) -> Self {
        Nucleus {
            center: draw.center,
        }
    }
}

/// One serialized unit of the test file: two orbital centers and a nucleus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub center1: BasisFunction,
    pub center2: BasisFunction,
    pub nucleus: Nucleus,
}

impl TestCase {
    /// Draw the three records of one test case in harness order.
    pub fn sample(rng: &mut impl Rng, params: &GeneratorParams) -> Self {
        let center1 = BasisFunction::sample(rng, params);
        let center2 = BasisFunction::sample(rng, params);
        let nucleus = Nucleus::from_draw(BasisFunction::sample(rng, params));
        TestCase {
            center1,
            center2,
            nucleus,
        }
    }
}
