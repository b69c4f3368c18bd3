use std::fmt::Display;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::results::Results;
use crate::visualization::environments::EnvironmentsComparison;
use crate::visualization::hyperparameter::HyperparameterComparison;
use crate::visualization::loss::LossCurves;
use crate::visualization::stability::EvaluationStability;
use crate::visualization::style::{output_path, render, Plot};
use crate::visualization::table;
use crate::visualization::training::TrainingComparison;

/// Produces report artifacts with one shared set of settings.
///
/// Every method writes exactly one file and returns its path. Nothing is
/// cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Reporter { config }
    }

    /// Default settings, writing figures to `save_dir`
    pub fn with_save_dir<P: AsRef<Path>>(save_dir: P) -> Self {
        Reporter {
            config: ReportConfig {
                save_dir: save_dir.as_ref().to_path_buf(),
                ..ReportConfig::default()
            },
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn save<P: Plot>(&self, plot: &P, stem: &str) -> Result<PathBuf> {
        let path = output_path(&self.config.save_dir, stem, self.config.format)?;
        render(plot, &path, self.config.dpi, self.config.format)?;
        Ok(path)
    }

    /// Overlay raw and smoothed DQN/DDQN training rewards.
    ///
    /// Writes `{env_name}_training_comparison.png`.
    pub fn plot_training_comparison(
        &self,
        dqn_rewards: &[f64],
        ddqn_rewards: &[f64],
        env_name: &str,
    ) -> Result<PathBuf> {
        let plot = TrainingComparison {
            env_name,
            dqn_rewards,
            ddqn_rewards,
            window: self.config.smoothing_window,
        };
        plot.validate()?;
        self.save(&plot, &plot.file_stem())
    }

    /// Per-episode evaluation rewards with their mean, ±1 std band and
    /// histogram.
    ///
    /// Writes `{env_name}_{algo_name}_stability.png`.
    pub fn plot_evaluation_stability(
        &self,
        eval_rewards: &[f64],
        env_name: &str,
        algo_name: &str,
    ) -> Result<PathBuf> {
        let plot = EvaluationStability {
            env_name,
            algo_name,
            eval_rewards,
            bins: self.config.histogram_bins,
        };
        plot.validate()?;
        self.save(&plot, &plot.file_stem())
    }

    /// Bar chart of mean ± std reward per hyperparameter value, ordered by
    /// value.
    ///
    /// Writes `{env_name}_{param_name}_comparison.png`.
    pub fn plot_hyperparameter_comparison<K, V, I>(
        &self,
        sweep: I,
        param_name: &str,
        env_name: &str,
    ) -> Result<PathBuf>
    where
        K: Display + PartialOrd,
        V: AsRef<[f64]>,
        I: IntoIterator<Item = (K, V)>,
    {
        let plot = HyperparameterComparison::from_sweep(env_name, param_name, sweep)?;
        self.save(&plot, &plot.file_stem())
    }

    /// Grouped DQN/DDQN bars for every environment.
    ///
    /// Writes `all_environments_comparison.png`.
    pub fn plot_all_environments_comparison(&self, results: &Results) -> Result<PathBuf> {
        let plot = EnvironmentsComparison::from_results(results)?;
        self.save(&plot, &plot.file_stem())
    }

    /// Raw and smoothed training loss on a log axis; series no longer than
    /// the smoothing window are drawn unsmoothed.
    ///
    /// Writes `{env_name}_{algo_name}_loss.png`.
    pub fn plot_loss_curves(&self, losses: &[f64], env_name: &str, algo_name: &str) -> Result<PathBuf> {
        let plot = LossCurves {
            env_name,
            algo_name,
            losses,
            window: self.config.smoothing_window,
        };
        plot.validate()?;
        self.save(&plot, &plot.file_stem())
    }

    /// Write the LaTeX summary table to `save_path`
    pub fn create_summary_table<P: AsRef<Path>>(&self, results: &Results, save_path: P) -> Result<()> {
        table::create_summary_table(results, save_path)
    }

    /// Every figure a results mapping supports on its own: the
    /// cross-environment comparison plus a stability plot for each
    /// algorithm that kept its evaluation rewards.
    pub fn plot_results(&self, results: &Results) -> Result<Vec<PathBuf>> {
        let mut written = vec![self.plot_all_environments_comparison(results)?];
        for (env, algos) in results {
            for (algo, result) in algos {
                if result.rewards.is_empty() {
                    debug!(environment = %env, algorithm = %algo, "no evaluation rewards, skipping stability plot");
                    continue;
                }
                written.push(self.plot_evaluation_stability(&result.rewards, env, algo)?);
            }
        }
        Ok(written)
    }
}
