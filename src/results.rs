//! Experiment results as produced by the training script.
//!
//! The on-disk layout is a JSON object keyed by environment name, each value
//! keyed by algorithm name:
//!
//! ```json
//! {
//!   "CartPole-v1": {
//!     "DQN":  { "mean": 485.3, "std": 12.5, "rewards": [480.0, 490.0] },
//!     "DDQN": { "mean": 495.1, "std": 8.2 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReportError, Result};

/// Name of the baseline algorithm
pub const DQN: &str = "DQN";

/// Name of the compared algorithm
pub const DDQN: &str = "DDQN";

/// Evaluation summary of one algorithm on one environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub mean: f64,
    pub std: f64,

    /// Per-episode evaluation rewards, when the training script kept them
    #[serde(default)]
    pub rewards: Vec<f64>,
}

impl AlgorithmResult {
    pub fn new(mean: f64, std: f64) -> Self {
        AlgorithmResult {
            mean,
            std,
            rewards: Vec::new(),
        }
    }

    /// Summarise a reward sequence, keeping the rewards
    pub fn from_rewards(rewards: Vec<f64>) -> Result<Self> {
        let stats = crate::metrics::Statistics::from_slice(&rewards)?;
        Ok(AlgorithmResult {
            mean: stats.mean,
            std: stats.std,
            rewards,
        })
    }
}

/// Results of every algorithm on one environment
pub type EnvironmentResults = BTreeMap<String, AlgorithmResult>;

/// Results of every environment, keyed by environment name
pub type Results = BTreeMap<String, EnvironmentResults>;

/// Look up one algorithm's result within an environment
pub fn algorithm_result<'a>(
    environment: &str,
    results: &'a EnvironmentResults,
    algorithm: &str,
) -> Result<&'a AlgorithmResult> {
    results
        .get(algorithm)
        .ok_or_else(|| ReportError::missing_algorithm(environment, algorithm))
}

/// Read a results file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Option<Results>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "results file not found");
        return Ok(None);
    }

    let text = std::fs::read_to_string(path)?;
    let results: Results = serde_json::from_str(&text)?;
    debug!(path = %path.display(), environments = results.len(), "loaded results");
    Ok(Some(results))
}

/// Write results as pretty-printed JSON, creating parent directories
pub fn save_results<P: AsRef<Path>>(results: &Results, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}
