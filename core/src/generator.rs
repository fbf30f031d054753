//! Linear Congruential Generator
//!
//! Recurrence: `x' = (a * x + c) mod m`
//!
//! Unlike a fixed-constant RNG, every parameter is supplied by the caller so the
//! detector can be run against any generator configuration.
//!
//! Reference: https://en.wikipedia.org/wiki/Linear_congruential_generator

use crate::error::PeriodError;

/// Parameters of a linear congruential generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgParams {
    /// Multiplier (a)
    pub multiplier: u64,
    /// Increment (c)
    pub increment: u64,
    /// Modulus (m), always positive once constructed through `new`
    pub modulus: u64,
}

impl LcgParams {
    /// Create generator parameters
    ///
    /// Returns `PeriodError::ZeroModulus` if `modulus` is 0.
    pub fn new(multiplier: u64, increment: u64, modulus: u64) -> Result<Self, PeriodError> {
        if modulus == 0 {
            return Err(PeriodError::ZeroModulus);
        }

        Ok(Self {
            multiplier,
            increment,
            modulus,
        })
    }
}

/// Compute the value following `x` in the sequence
///
/// Pure and O(1). The product is taken in u128 so `a * x + c` cannot overflow
/// for any u64 inputs.
#[inline]
pub fn next(params: &LcgParams, x: u64) -> u64 {
    let raw = params.multiplier as u128 * x as u128 + params.increment as u128;
    (raw % params.modulus as u128) as u64
}

/// Iterator over the values generated after a seed
///
/// The seed itself is never yielded; the first item is the value at step 1.
#[derive(Clone, Debug)]
pub struct Lcg {
    params: LcgParams,
    state: u64,
}

impl Lcg {
    pub fn new(params: LcgParams, seed: u64) -> Self {
        Self {
            params,
            state: seed,
        }
    }

    /// Advance the generator and return the new value
    pub fn next_value(&mut self) -> u64 {
        self.state = next(&self.params, self.state);
        self.state
    }

    pub fn params(&self) -> &LcgParams {
        &self.params
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    fn params(a: u64, c: u64, m: u64) -> LcgParams {
        LcgParams::new(a, c, m).unwrap()
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(LcgParams::new(3, 19, 0), Err(PeriodError::ZeroModulus));
    }

    #[test]
    fn test_next_reference_values() {
        let p = params(3, 19, 15001);
        // 3 * 27 + 19 = 100
        assert_eq!(next(&p, 27), 100);
        // 3 * 100 + 19 = 319
        assert_eq!(next(&p, 100), 319);
        // 3 * 5000 + 19 = 15019 -> 18
        assert_eq!(next(&p, 5000), 18);
    }

    #[test]
    fn test_next_stays_below_modulus() {
        let p = params(u64::MAX, u64::MAX, 1_000_003);
        for x in [0, 1, 999_999, u64::MAX] {
            assert!(next(&p, x) < 1_000_003, "value for {} out of range", x);
        }
    }

    #[test]
    fn test_modulus_one_is_always_zero() {
        let p = params(3, 19, 1);
        assert_eq!(next(&p, 27), 0);
        assert_eq!(next(&p, 0), 0);
    }

    #[test]
    fn test_iterator_skips_seed() {
        let seq: Vec<u64> = Lcg::new(params(3, 19, 15001), 27).take(3).collect();
        assert_eq!(seq, [100, 319, 976]);
    }

    #[test]
    fn test_determinism() {
        let mut g1 = Lcg::new(params(1103515245, 12345, 1 << 31), 42);
        let mut g2 = Lcg::new(params(1103515245, 12345, 1 << 31), 42);

        for _ in 0..100 {
            assert_eq!(g1.next_value(), g2.next_value(), "LCG not deterministic");
        }
    }
}
