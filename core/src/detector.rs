//! Period detection by remembering every generated value
//!
//! Algorithm:
//! 1. Start from the seed with the step counter at 1 and an empty index
//! 2. Generate the next value and look it up
//!    - Seen before at step `s`: the period is `counter - s`, stop
//!    - Not seen: record it at the current step, advance the counter
//!
//! The seed is never recorded, only generated values (steps >= 1). Since at most
//! `modulus` distinct values exist, a repeat is found within `modulus + 1`
//! generations.

use crate::error::PeriodError;
use crate::generator::{next, LcgParams};
use crate::membership::{MembershipIndex, NOT_FOUND};

/// Outcome of a finished detection run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Length of the repeating cycle
    pub period: u64,

    /// Step at which the repeated value was first generated (start of the cycle)
    pub first_step: u64,

    /// Step at which the value was generated again
    pub repeat_step: u64,

    /// The value that repeated
    pub repeated_value: u64,

    /// Distinct values recorded before the repeat
    pub distinct_values: usize,

    /// Longest collision chain in the index at the end of the run
    pub longest_chain: usize,
}

/// Detector state: RUNNING until `step` returns a `Detection`
#[derive(Debug)]
pub struct CycleDetector {
    params: LcgParams,
    current: u64,
    counter: u64,
    index: MembershipIndex,
}

impl CycleDetector {
    pub fn new(params: LcgParams, seed: u64, table_size: usize) -> Result<Self, PeriodError> {
        Ok(Self {
            params,
            current: seed,
            counter: 1,
            index: MembershipIndex::new(table_size)?,
        })
    }

    /// Perform one generation and lookup
    ///
    /// Returns `Ok(Some(..))` once a value repeats, `Ok(None)` while still running.
    pub fn step(&mut self) -> Result<Option<Detection>, PeriodError> {
        let value = next(&self.params, self.current);

        let first_step = self.index.search(value);
        if first_step != NOT_FOUND {
            return Ok(Some(Detection {
                period: self.counter - first_step,
                first_step,
                repeat_step: self.counter,
                repeated_value: value,
                distinct_values: self.index.len(),
                longest_chain: self.index.longest_chain(),
            }));
        }

        self.counter += self.index.insert(value, self.counter)?;
        self.current = value;
        Ok(None)
    }

    /// Drive the detector until a value repeats
    pub fn run(mut self) -> Result<Detection, PeriodError> {
        loop {
            if let Some(detection) = self.step()? {
                return Ok(detection);
            }
        }
    }

    /// Current step counter (the step the next generated value will occupy)
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn index(&self) -> &MembershipIndex {
        &self.index
    }
}

/// Run a full detection and return every detail of the repeat
pub fn detect(params: LcgParams, seed: u64, table_size: usize) -> Result<Detection, PeriodError> {
    CycleDetector::new(params, seed, table_size)?.run()
}

/// Length of the cycle the sequence from `seed` falls into
///
/// # Example
/// ```
/// use period_core::{detect_period, LcgParams};
///
/// let params = LcgParams::new(3, 19, 15001).unwrap();
/// assert_eq!(detect_period(params, 27, 500).unwrap(), 2142);
/// ```
pub fn detect_period(params: LcgParams, seed: u64, table_size: usize) -> Result<u64, PeriodError> {
    detect(params, seed, table_size).map(|detection| detection.period)
}
