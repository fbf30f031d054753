//! Period detection for linear congruential generators
//!
//! Generates the sequence `x' = (a * x + c) mod m` from a seed and stops at the
//! first value that was already produced, reporting how many steps separate the
//! two occurrences. Every generated value is remembered in a chained hash table
//! so a repeat is recognised the moment it appears.
//!
//! The crate is no_std and only needs `alloc` for the hash table.

#![no_std]

extern crate alloc;

pub mod detector;
pub mod error;
pub mod generator;
pub mod membership;

pub use detector::{detect, detect_period, CycleDetector, Detection};
pub use error::PeriodError;
pub use generator::{next, Lcg, LcgParams};
pub use membership::{MembershipIndex, SeenRecord, NOT_FOUND};

/// Reference generator multiplier (a)
pub const MULTIPLIER: u64 = 3;

/// Reference generator increment (c)
pub const INCREMENT: u64 = 19;

/// Reference generator modulus (m)
pub const MODULUS: u64 = 15001;

/// Reference seed
pub const SEED: u64 = 27;

/// Bucket count of the membership index in the reference configuration
pub const TABLE_SIZE: usize = 500;
