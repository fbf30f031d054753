//! Error type shared by the generator, the membership index and the detector.

use thiserror::Error;

/// Errors that can occur while detecting a period
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    /// The membership index could not grow to hold another record.
    #[error("memory allocation failed while indexing {records} records")]
    ResourceExhausted { records: usize },

    #[error("generator modulus must be positive")]
    ZeroModulus,

    #[error("membership index needs at least one bucket")]
    ZeroTableSize,
}
