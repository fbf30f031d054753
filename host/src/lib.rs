use period_core::{detect, Detection, LcgParams, PeriodError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;

/// Errors surfaced by the host library
#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output format for the detection result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single human-readable line (default)
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything needed to run one detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub params: LcgParams,
    pub seed: u64,
    pub table_size: usize,
}

impl Default for RunConfig {
    /// The reference configuration: a=3, c=19, m=15001, seed=27, 500 buckets
    fn default() -> Self {
        Self {
            params: LcgParams {
                multiplier: period_core::MULTIPLIER,
                increment: period_core::INCREMENT,
                modulus: period_core::MODULUS,
            },
            seed: period_core::SEED,
            table_size: period_core::TABLE_SIZE,
        }
    }
}

/// Result of a detection run together with the configuration that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub config: RunConfig,
    pub detection: Detection,
}

impl PeriodReport {
    /// The single line printed for text output
    pub fn summary_line(&self) -> String {
        format!("The period of the sequence is: {}", self.detection.period)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, HostError> {
        match format {
            OutputFormat::Text => Ok(self.summary_line()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Detect the period of the sequence described by `config`.
///
/// # Example
/// ```
/// use period_host::{run_detection, RunConfig};
///
/// let report = run_detection(&RunConfig::default()).unwrap();
/// assert_eq!(report.detection.period, 2142);
/// ```
pub fn run_detection(config: &RunConfig) -> Result<PeriodReport, HostError> {
    let params = LcgParams::new(
        config.params.multiplier,
        config.params.increment,
        config.params.modulus,
    )?;

    tracing::info!(
        "Detecting period for a={} c={} m={} seed={} ({} buckets)",
        params.multiplier,
        params.increment,
        params.modulus,
        config.seed,
        config.table_size
    );

    let detection = detect(params, config.seed, config.table_size)?;

    tracing::debug!(
        distinct_values = detection.distinct_values,
        longest_chain = detection.longest_chain,
        "Membership index at repeat"
    );
    tracing::info!(
        "Value {} first generated at step {} repeated at step {} (period {})",
        detection.repeated_value,
        detection.first_step,
        detection.repeat_step,
        detection.period
    );

    Ok(PeriodReport {
        config: RunConfig { params, ..*config },
        detection,
    })
}
