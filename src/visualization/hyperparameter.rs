use std::cmp::Ordering;
use std::fmt::Display;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::style::{
    category_label, category_ticks, ensure_finite, error_bar, padded_range, Figure, Plot, PALETTE,
};
use crate::error::{ReportError, Result};
use crate::metrics::statistics::Statistics;

/// Mean ± std of the reward for each value of a swept hyperparameter
pub(crate) struct HyperparameterComparison<'a> {
    pub env_name: &'a str,
    pub param_name: &'a str,
    /// `(label, stats)` in ascending parameter order
    pub entries: Vec<(String, Statistics)>,
}

impl<'a> HyperparameterComparison<'a> {
    /// Sort the sweep by parameter value and summarise each run's rewards
    pub fn from_sweep<K, V, I>(env_name: &'a str, param_name: &'a str, sweep: I) -> Result<Self>
    where
        K: Display + PartialOrd,
        V: AsRef<[f64]>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut runs: Vec<(K, V)> = sweep.into_iter().collect();
        if runs.is_empty() {
            return Err(ReportError::EmptySeries(format!(
                "no {} values to compare on {}",
                param_name, env_name
            )));
        }
        runs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let entries = runs
            .iter()
            .map(|(value, rewards)| {
                ensure_finite(&format!("{} = {} rewards", param_name, value), rewards.as_ref())?;
                let stats = Statistics::from_slice(rewards.as_ref()).map_err(|_| {
                    ReportError::EmptySeries(format!("{} = {} has no rewards", param_name, value))
                })?;
                Ok((value.to_string(), stats))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(HyperparameterComparison {
            env_name,
            param_name,
            entries,
        })
    }

    pub fn file_stem(&self) -> String {
        format!("{}_{}_comparison", self.env_name, self.param_name)
    }
}

impl Plot for HyperparameterComparison<'_> {
    fn size_inches(&self) -> (f64, f64) {
        (10.0, 6.0)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
        let n = self.entries.len();
        let lo = self
            .entries
            .iter()
            .map(|(_, s)| s.mean - s.std)
            .fold(0.0f64, f64::min);
        let hi = self
            .entries
            .iter()
            .map(|(_, s)| s.mean + s.std)
            .fold(0.0f64, f64::max);
        let (y_lo, y_hi) = padded_range(lo, hi, 0.05);
        let y_lo = if lo >= 0.0 { 0.0 } else { y_lo };

        let labels: Vec<&str> = self.entries.iter().map(|(label, _)| label.as_str()).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("Effect of {} on {}", self.param_name, self.env_name),
                figure.bold_font(16.0),
            )
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(40.0))
            .y_label_area_size(figure.pt(60.0))
            .build_cartesian_2d(-0.6f64..n as f64 - 0.4, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_labels(category_ticks(n))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .x_desc(self.param_name)
            .y_desc("Average Reward")
            .axis_desc_style(figure.font(14.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let half = 0.4;
        let fill = PALETTE[2].mix(0.7).filled();
        let edge = BLACK.stroke_width(figure.pt(0.75));
        chart.draw_series(self.entries.iter().enumerate().map(|(i, (_, s))| {
            let x = i as f64;
            Rectangle::new([(x - half, 0.0), (x + half, s.mean)], fill)
        }))?;
        chart.draw_series(self.entries.iter().enumerate().map(|(i, (_, s))| {
            let x = i as f64;
            Rectangle::new([(x - half, 0.0), (x + half, s.mean)], edge)
        }))?;

        let whisker = BLACK.stroke_width(figure.pt(1.0));
        chart.draw_series(self.entries.iter().enumerate().flat_map(|(i, (_, s))| {
            error_bar(i as f64, s.mean - s.std, s.mean + s.std, 0.1)
                .into_iter()
                .map(move |points| PathElement::new(points, whisker))
        }))?;

        Ok(())
    }
}
