//! Figures and tables for the report.
//!
//! The free functions here use the default [`ReportConfig`](crate::config::ReportConfig)
//! (300 dpi PNG, 50-episode smoothing window) and only take the output
//! directory; use a [`Reporter`](crate::Reporter) to change the settings.

pub mod style;
pub mod table;

pub(crate) mod environments;
pub(crate) mod hyperparameter;
pub(crate) mod loss;
pub(crate) mod stability;
pub(crate) mod training;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::reporter::Reporter;
use crate::results::Results;

pub use style::{Figure, PALETTE};
pub use table::{create_summary_table, render_latex_table, summary_rows, SummaryRow};

/// Compare DQN and DDQN training curves, see [`Reporter::plot_training_comparison`]
pub fn plot_training_comparison<P: AsRef<Path>>(
    dqn_rewards: &[f64],
    ddqn_rewards: &[f64],
    env_name: &str,
    save_dir: P,
) -> Result<PathBuf> {
    Reporter::with_save_dir(save_dir).plot_training_comparison(dqn_rewards, ddqn_rewards, env_name)
}

/// Plot evaluation episode rewards to show stability, see
/// [`Reporter::plot_evaluation_stability`]
pub fn plot_evaluation_stability<P: AsRef<Path>>(
    eval_rewards: &[f64],
    env_name: &str,
    algo_name: &str,
    save_dir: P,
) -> Result<PathBuf> {
    Reporter::with_save_dir(save_dir).plot_evaluation_stability(eval_rewards, env_name, algo_name)
}

/// Plot the effect of different hyperparameter values, see
/// [`Reporter::plot_hyperparameter_comparison`]
pub fn plot_hyperparameter_comparison<K, V, I, P>(
    sweep: I,
    param_name: &str,
    env_name: &str,
    save_dir: P,
) -> Result<PathBuf>
where
    K: Display + PartialOrd,
    V: AsRef<[f64]>,
    I: IntoIterator<Item = (K, V)>,
    P: AsRef<Path>,
{
    Reporter::with_save_dir(save_dir).plot_hyperparameter_comparison(sweep, param_name, env_name)
}

/// Summary plot comparing all environments, see
/// [`Reporter::plot_all_environments_comparison`]
pub fn plot_all_environments_comparison<P: AsRef<Path>>(results: &Results, save_dir: P) -> Result<PathBuf> {
    Reporter::with_save_dir(save_dir).plot_all_environments_comparison(results)
}

/// Plot training loss over episodes, see [`Reporter::plot_loss_curves`]
pub fn plot_loss_curves<P: AsRef<Path>>(
    losses: &[f64],
    env_name: &str,
    algo_name: &str,
    save_dir: P,
) -> Result<PathBuf> {
    Reporter::with_save_dir(save_dir).plot_loss_curves(losses, env_name, algo_name)
}
