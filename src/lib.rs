//! # rl-report - Figures and tables for DQN/DDQN experiment reports
//!
//! Turns the results of reinforcement-learning experiments (training reward
//! curves, loss curves, evaluation rewards, hyperparameter sweeps) into
//! publication-style figures and a LaTeX results table.
//!
//! Every operation is a stateless transform: it reads in-memory sequences or
//! a results mapping and writes exactly one file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rl_report::visualization::{plot_training_comparison, create_summary_table};
//! use rl_report::results::load_results;
//!
//! let dqn: Vec<f64> = (0..500).map(|i| i as f64).collect();
//! let ddqn: Vec<f64> = (0..500).map(|i| i as f64 * 1.02).collect();
//!
//! // plots/CartPole-v1_training_comparison.png
//! plot_training_comparison(&dqn, &ddqn, "CartPole-v1", "plots")?;
//!
//! if let Some(results) = load_results("results.json")? {
//!     create_summary_table(&results, "summary_table.txt")?;
//! }
//! # Ok::<(), rl_report::error::ReportError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`builders`] - Builder for report settings
//! - [`config`] - Output directory, resolution, smoothing window and image format
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Mean/std summaries, moving average, histograms, relative improvement
//! - [`reporter`] - [`Reporter`], which renders every artifact with one set of settings
//! - [`results`] - Results data model, loader and writer
//! - [`visualization`] - The figures and the summary table

pub mod builders;
pub mod config;
pub mod error;
pub mod metrics;
pub mod reporter;
pub mod results;
pub mod visualization;

pub use config::{ImageFormat, ReportConfig};
pub use error::{ReportError, Result};
pub use reporter::Reporter;

#[cfg(test)]
mod tests;
