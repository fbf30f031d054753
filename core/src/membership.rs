//! Membership index: a fixed-size chained hash table from sequence value to the
//! step at which the value was first generated.
//!
//! Buckets are keyed by `value % table_size` and keep their records in insertion
//! order. The bucket count never changes after construction, so a small table
//! simply produces longer chains.

use alloc::vec::Vec;

use crate::error::PeriodError;

/// Returned by `search` when a value has not been seen.
///
/// Steps are numbered from 1, so 0 never collides with a real record.
pub const NOT_FOUND: u64 = 0;

/// A generated value paired with the step at which it first appeared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeenRecord {
    pub value: u64,
    pub step: u64,
}

/// Chained hash table of seen values
#[derive(Debug)]
pub struct MembershipIndex {
    buckets: Vec<Vec<SeenRecord>>,
    len: usize,
}

impl MembershipIndex {
    /// Create an empty index with `table_size` buckets
    pub fn new(table_size: usize) -> Result<Self, PeriodError> {
        if table_size == 0 {
            return Err(PeriodError::ZeroTableSize);
        }

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(table_size)
            .map_err(|_| PeriodError::ResourceExhausted { records: 0 })?;
        buckets.resize_with(table_size, Vec::new);

        Ok(Self { buckets, len: 0 })
    }

    #[inline]
    fn bucket_of(&self, value: u64) -> usize {
        (value % self.buckets.len() as u64) as usize
    }

    /// Append `value` first seen at `step` to the tail of its bucket
    ///
    /// Returns the amount the caller should advance its step counter by: 1 once
    /// the record sits at the bucket's tail, which holds for every insert.
    /// Allocation failure leaves the index unchanged and is reported as
    /// `PeriodError::ResourceExhausted`.
    pub fn insert(&mut self, value: u64, step: u64) -> Result<u64, PeriodError> {
        let idx = self.bucket_of(value);
        let records = self.len;
        let bucket = &mut self.buckets[idx];

        bucket
            .try_reserve(1)
            .map_err(|_| PeriodError::ResourceExhausted { records })?;
        bucket.push(SeenRecord { value, step });
        self.len += 1;

        match bucket.last() {
            Some(tail) if tail.value == value => Ok(1),
            _ => Ok(0),
        }
    }

    /// Step at which `value` was first recorded, or `NOT_FOUND`
    ///
    /// Walks the chain in insertion order and stops at the first match.
    pub fn search(&self, value: u64) -> u64 {
        self.buckets[self.bucket_of(value)]
            .iter()
            .find(|record| record.value == value)
            .map_or(NOT_FOUND, |record| record.step)
    }

    /// Number of records stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets fixed at construction
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest collision chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}
