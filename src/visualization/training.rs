use plotters::coord::Shift;
use plotters::prelude::*;

use super::style::{ensure_finite, padded_range, Figure, Plot, PALETTE};
use crate::error::{ReportError, Result};
use crate::metrics::statistics::{moving_average, value_bounds};
use crate::results::{DDQN, DQN};

/// Raw and smoothed reward curves of DQN and DDQN on one environment
pub(crate) struct TrainingComparison<'a> {
    pub env_name: &'a str,
    pub dqn_rewards: &'a [f64],
    pub ddqn_rewards: &'a [f64],
    pub window: usize,
}

impl<'a> TrainingComparison<'a> {
    pub fn file_stem(&self) -> String {
        format!("{}_training_comparison", self.env_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dqn_rewards.is_empty() || self.ddqn_rewards.is_empty() {
            return Err(ReportError::EmptySeries(format!(
                "training rewards for {} must not be empty",
                self.env_name
            )));
        }
        ensure_finite(&format!("{} rewards", DQN), self.dqn_rewards)?;
        ensure_finite(&format!("{} rewards", DDQN), self.ddqn_rewards)?;
        Ok(())
    }
}

impl Plot for TrainingComparison<'_> {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 6.0)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
        let dqn_smooth = moving_average(self.dqn_rewards, self.window)?.to_vec();
        let ddqn_smooth = moving_average(self.ddqn_rewards, self.window)?.to_vec();

        let episodes = self.dqn_rewards.len().max(self.ddqn_rewards.len());
        let (lo, hi) = value_bounds([self.dqn_rewards, self.ddqn_rewards])
            .ok_or_else(|| ReportError::EmptySeries("training rewards".to_string()))?;
        let (y_lo, y_hi) = padded_range(lo, hi, 0.05);
        let x_hi = (episodes.saturating_sub(1)).max(1) as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("Training Curves: {}", self.env_name),
                figure.bold_font(16.0),
            )
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(40.0))
            .y_label_area_size(figure.pt(60.0))
            .build_cartesian_2d(0f64..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_desc("Episode")
            .y_desc("Reward")
            .axis_desc_style(figure.font(14.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let curves = [
            (DQN, self.dqn_rewards, dqn_smooth.as_slice(), PALETTE[0]),
            (DDQN, self.ddqn_rewards, ddqn_smooth.as_slice(), PALETTE[1]),
        ];
        let sample = figure.pt(20.0) as i32;
        for (name, raw, smooth, color) in curves {
            let raw_style = color.mix(0.3).stroke_width(figure.pt(1.5));
            chart
                .draw_series(LineSeries::new(
                    raw.iter().enumerate().map(|(i, &r)| (i as f64, r)),
                    raw_style,
                ))?
                .label(format!("{} (raw)", name))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], raw_style));

            let smooth_style = color.stroke_width(figure.pt(2.0));
            chart
                .draw_series(LineSeries::new(
                    smooth.iter().enumerate().map(|(i, &r)| (i as f64, r)),
                    smooth_style,
                ))?
                .label(format!("{} (smoothed)", name))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], smooth_style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(figure.font(12.0))
            .border_style(BLACK.mix(0.4))
            .background_style(WHITE.mix(0.8))
            .draw()?;

        Ok(())
    }
}
