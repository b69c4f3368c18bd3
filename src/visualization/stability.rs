use plotters::coord::Shift;
use plotters::prelude::*;

use super::style::{
    ensure_finite, horizontal_dashes, padded_range, vertical_dashes, Figure, Plot, MEAN_COLOR, PALETTE,
};
use crate::error::{ReportError, Result};
use crate::metrics::statistics::{Histogram, Statistics};

/// Evaluation rewards of one algorithm: the per-episode trace next to its
/// distribution
pub(crate) struct EvaluationStability<'a> {
    pub env_name: &'a str,
    pub algo_name: &'a str,
    pub eval_rewards: &'a [f64],
    pub bins: usize,
}

impl<'a> EvaluationStability<'a> {
    pub fn file_stem(&self) -> String {
        format!("{}_{}_stability", self.env_name, self.algo_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.eval_rewards.is_empty() {
            return Err(ReportError::EmptySeries(format!(
                "evaluation rewards for {} on {} must not be empty",
                self.algo_name, self.env_name
            )));
        }
        ensure_finite("eval_rewards", self.eval_rewards)
    }

    fn draw_trace<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        figure: &Figure,
        stats: &Statistics,
    ) -> Result<()> {
        let band_lo = stats.mean - stats.std;
        let band_hi = stats.mean + stats.std;
        let (y_lo, y_hi) = padded_range(stats.min.min(band_lo), stats.max.max(band_hi), 0.05);
        let x_hi = self.eval_rewards.len().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("{} Stability: {}", self.algo_name, self.env_name),
                figure.bold_font(14.0),
            )
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(36.0))
            .y_label_area_size(figure.pt(56.0))
            .build_cartesian_2d(0f64..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_desc("Test Episode")
            .y_desc("Reward")
            .axis_desc_style(figure.font(12.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let sample = figure.pt(20.0) as i32;
        let band_style = MEAN_COLOR.mix(0.2).filled();
        chart
            .draw_series(std::iter::once(Polygon::new(
                vec![(0.0, band_lo), (x_hi, band_lo), (x_hi, band_hi), (0.0, band_hi)],
                band_style,
            )))?
            .label(format!("±1 Std: {:.2}", stats.std))
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - sample / 4), (x + sample, y + sample / 4)], band_style)
            });

        let line_style = PALETTE[0].stroke_width(figure.pt(1.0));
        let marker_size = figure.pt(1.5);
        chart.draw_series(LineSeries::new(
            self.eval_rewards.iter().enumerate().map(|(i, &r)| (i as f64, r)),
            line_style,
        ))?;
        chart.draw_series(
            self.eval_rewards
                .iter()
                .enumerate()
                .map(|(i, &r)| Circle::new((i as f64, r), marker_size, PALETTE[0].filled())),
        )?;

        let mean_style = MEAN_COLOR.stroke_width(figure.pt(1.5));
        chart
            .draw_series(
                horizontal_dashes(0.0, x_hi, stats.mean, 30)
                    .into_iter()
                    .map(|points| PathElement::new(points, mean_style)),
            )?
            .label(format!("Mean: {:.2}", stats.mean))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], mean_style));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .label_font(figure.font(10.0))
            .border_style(BLACK.mix(0.4))
            .background_style(WHITE.mix(0.8))
            .draw()?;

        Ok(())
    }

    fn draw_distribution<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        figure: &Figure,
        stats: &Statistics,
    ) -> Result<()> {
        let histogram = Histogram::from_values(self.eval_rewards, self.bins)?;
        let x_lo = histogram.edges[0];
        let x_hi = histogram.edges[histogram.edges.len() - 1];
        let (x_lo, x_hi) = padded_range(x_lo, x_hi, 0.05);
        let y_hi = histogram.max_count().max(1) as f64 * 1.05;

        let mut chart = ChartBuilder::on(area)
            .caption("Reward Distribution", figure.bold_font(14.0))
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(36.0))
            .y_label_area_size(figure.pt(56.0))
            .build_cartesian_2d(x_lo..x_hi, 0f64..y_hi)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_desc("Reward")
            .y_desc("Frequency")
            .axis_desc_style(figure.font(12.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let fill = PALETTE[1].mix(0.7).filled();
        let edge = BLACK.stroke_width(figure.pt(0.5));
        chart.draw_series(
            histogram
                .bins()
                .map(|(left, right, count)| Rectangle::new([(left, 0.0), (right, count as f64)], fill)),
        )?;
        chart.draw_series(
            histogram
                .bins()
                .map(|(left, right, count)| Rectangle::new([(left, 0.0), (right, count as f64)], edge)),
        )?;

        let sample = figure.pt(20.0) as i32;
        let mean_style = MEAN_COLOR.stroke_width(figure.pt(2.0));
        chart
            .draw_series(
                vertical_dashes(0.0, y_hi, stats.mean, 20)
                    .into_iter()
                    .map(|points| PathElement::new(points, mean_style)),
            )?
            .label("Mean")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], mean_style));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(figure.font(10.0))
            .border_style(BLACK.mix(0.4))
            .background_style(WHITE.mix(0.8))
            .draw()?;

        Ok(())
    }
}

impl Plot for EvaluationStability<'_> {
    fn size_inches(&self) -> (f64, f64) {
        (14.0, 5.0)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
        let stats = Statistics::from_slice(self.eval_rewards)?;
        let panels = root.split_evenly((1, 2));
        self.draw_trace(&panels[0], figure, &stats)?;
        self.draw_distribution(&panels[1], figure, &stats)?;
        Ok(())
    }
}
