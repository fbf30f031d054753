//! CLI argument parsing for the period detector

use clap::Parser;

use crate::{OutputFormat, RunConfig};
use period_core::LcgParams;

#[derive(Parser, Debug)]
#[command(name = "period-detect")]
#[command(version)]
#[command(about = "Detect the period of a linear congruential generator", long_about = None)]
pub struct Cli {
    /// Generator multiplier (a)
    #[arg(short = 'a', long, default_value_t = period_core::MULTIPLIER)]
    pub multiplier: u64,

    /// Generator increment (c)
    #[arg(short = 'c', long, default_value_t = period_core::INCREMENT)]
    pub increment: u64,

    /// Generator modulus (m), must be positive
    #[arg(short = 'm', long, default_value_t = period_core::MODULUS)]
    pub modulus: u64,

    /// Seed the sequence starts from
    #[arg(short = 's', long, default_value_t = period_core::SEED)]
    pub seed: u64,

    /// Number of buckets in the membership index
    #[arg(short = 't', long = "table-size", default_value_t = period_core::TABLE_SIZE)]
    pub table_size: usize,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Detection settings described by the parsed flags
    ///
    /// The modulus is validated later by `run_detection`.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            params: LcgParams {
                multiplier: self.multiplier,
                increment: self.increment,
                modulus: self.modulus,
            },
            seed: self.seed,
            table_size: self.table_size,
        }
    }
}
