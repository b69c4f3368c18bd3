use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::metrics::statistics::improvement_percentage;
use crate::results::{algorithm_result, Results, DDQN, DQN};

/// One environment's row of the summary table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub environment: String,
    pub dqn_mean: f64,
    pub dqn_std: f64,
    pub ddqn_mean: f64,
    pub ddqn_std: f64,
    /// Relative change of DDQN over DQN, in percent
    pub improvement: f64,
}

/// Compute one row per environment, in mapping order
pub fn summary_rows(results: &Results) -> Result<Vec<SummaryRow>> {
    results
        .iter()
        .map(|(env, algos)| {
            let dqn = algorithm_result(env, algos, DQN)?;
            let ddqn = algorithm_result(env, algos, DDQN)?;
            Ok(SummaryRow {
                environment: env.clone(),
                dqn_mean: dqn.mean,
                dqn_std: dqn.std,
                ddqn_mean: ddqn.mean,
                ddqn_std: ddqn.std,
                improvement: improvement_percentage(dqn.mean, ddqn.mean)?,
            })
        })
        .collect()
}

/// Render the LaTeX `table` environment for `rows`
pub fn render_latex_table(rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    out.push_str("\\begin{table}[h]\n");
    out.push_str("\\centering\n");
    out.push_str("\\begin{tabular}{|l|c|c|c|}\n");
    out.push_str("\\hline\n");
    out.push_str(
        "\\textbf{Environment} & \\textbf{DQN} & \\textbf{DDQN} & \\textbf{Improvement} \\\\\n",
    );
    out.push_str("\\hline\n");

    for row in rows {
        out.push_str(&format!(
            "{} & ${:.1} \\pm {:.1}$ & ${:.1} \\pm {:.1}$ & {:+.1}\\% \\\\\n",
            row.environment, row.dqn_mean, row.dqn_std, row.ddqn_mean, row.ddqn_std, row.improvement
        ));
    }

    out.push_str("\\hline\n");
    out.push_str("\\end{tabular}\n");
    out.push_str(
        "\\caption{Performance Comparison: DQN vs DDQN (Mean $\\pm$ Std over 100 episodes)}\n",
    );
    out.push_str("\\label{tab:results}\n");
    out.push_str("\\end{table}\n");
    out
}

/// Write the LaTeX summary table for `results` to `save_path`.
///
/// Every row is computed before the file is touched, so a missing algorithm
/// or a zero DQN mean leaves no partial table behind.
pub fn create_summary_table<P: AsRef<Path>>(results: &Results, save_path: P) -> Result<()> {
    let save_path = save_path.as_ref();
    let rows = summary_rows(results)?;
    let table = render_latex_table(&rows);

    if let Some(parent) = save_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(save_path, table)?;

    info!("LaTeX table saved to {}", save_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::AlgorithmResult;

    fn cartpole(dqn_mean: f64) -> Results {
        let mut algos = std::collections::BTreeMap::new();
        algos.insert(DQN.to_string(), AlgorithmResult::new(dqn_mean, 5.0));
        algos.insert(DDQN.to_string(), AlgorithmResult::new(120.0, 4.0));
        let mut results = Results::new();
        results.insert("CartPole-v1".to_string(), algos);
        results
    }

    #[test]
    fn test_row_formatting() {
        let rows = summary_rows(&cartpole(100.0)).unwrap();
        let table = render_latex_table(&rows);
        assert!(table.contains("CartPole-v1 & $100.0 \\pm 5.0$ & $120.0 \\pm 4.0$ & +20.0\\% \\\\\n"));
    }

    #[test]
    fn test_negative_improvement_sign() {
        let rows = summary_rows(&cartpole(150.0)).unwrap();
        assert!(render_latex_table(&rows).contains("& -20.0\\% \\\\"));
    }
}
