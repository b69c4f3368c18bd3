use plotters::coord::Shift;
use plotters::prelude::*;

use super::style::{positive_runs, Figure, Plot, PALETTE};
use crate::error::{ReportError, Result};
use crate::metrics::statistics::moving_average;

/// Training loss of one algorithm on a logarithmic axis
pub(crate) struct LossCurves<'a> {
    pub env_name: &'a str,
    pub algo_name: &'a str,
    pub losses: &'a [f64],
    pub window: usize,
}

impl<'a> LossCurves<'a> {
    pub fn file_stem(&self) -> String {
        format!("{}_{}_loss", self.env_name, self.algo_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.losses.is_empty() {
            return Err(ReportError::EmptySeries(format!(
                "losses of {} on {} must not be empty",
                self.algo_name, self.env_name
            )));
        }
        if !self.losses.iter().any(|l| *l > 0.0 && l.is_finite()) {
            return Err(ReportError::invalid_parameter(
                "losses",
                "no positive finite loss to draw on a logarithmic axis",
            ));
        }
        Ok(())
    }

    /// Raw losses split into drawable runs; zero, negative and non-finite
    /// losses are left out of the log axis
    fn raw_runs(&self) -> Vec<Vec<(f64, f64)>> {
        positive_runs(self.losses.iter().enumerate().map(|(i, &l)| (i as f64, l)))
    }

    /// Smoothed series positioned at the last episode of each window, or
    /// `None` when there are too few losses to fill one window
    fn smoothed(&self) -> Result<Option<Vec<Vec<(f64, f64)>>>> {
        if self.losses.len() <= self.window {
            return Ok(None);
        }
        let offset = self.window - 1;
        let smooth = moving_average(self.losses, self.window)?;
        Ok(Some(positive_runs(
            smooth.iter().enumerate().map(|(i, &v)| ((i + offset) as f64, v)),
        )))
    }
}

impl Plot for LossCurves<'_> {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 6.0)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
        let raw = self.raw_runs();
        let smoothed = self.smoothed()?;
        let (lo, hi) = raw
            .iter()
            .chain(smoothed.iter().flatten())
            .flatten()
            .map(|&(_, y)| y)
            .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
            .ok_or_else(|| ReportError::invalid_parameter("losses", "no positive finite loss"))?;
        // Half a decade of headroom on either side.
        let (y_lo, y_hi) = if hi > lo {
            (lo / 10f64.sqrt(), hi * 10f64.sqrt())
        } else {
            (lo / 10.0, hi * 10.0)
        };
        let x_hi = self.losses.len().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("{} Training Loss: {}", self.algo_name, self.env_name),
                figure.bold_font(16.0),
            )
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(40.0))
            .y_label_area_size(figure.pt(64.0))
            .build_cartesian_2d(0f64..x_hi, (y_lo..y_hi).log_scale())?;

        chart
            .configure_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_desc("Episode")
            .y_desc("Loss")
            .y_label_formatter(&|y| format!("{:.0e}", y))
            .axis_desc_style(figure.font(14.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let color = PALETTE[3];
        let sample = figure.pt(20.0) as i32;

        match smoothed {
            Some(runs) => {
                let raw_style = color.mix(0.3).stroke_width(figure.pt(1.5));
                chart
                    .draw_series(raw.into_iter().map(|run| PathElement::new(run, raw_style)))?
                    .label("Loss (raw)")
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], raw_style));

                let smooth_style = color.stroke_width(figure.pt(2.0));
                chart
                    .draw_series(runs.into_iter().map(|run| PathElement::new(run, smooth_style)))?
                    .label("Loss (smoothed)")
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], smooth_style));
            }
            None => {
                let style = color.stroke_width(figure.pt(2.0));
                chart
                    .draw_series(raw.into_iter().map(|run| PathElement::new(run, style)))?
                    .label("Loss")
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(figure.font(12.0))
            .border_style(BLACK.mix(0.4))
            .background_style(WHITE.mix(0.8))
            .draw()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves(losses: &[f64], window: usize) -> LossCurves<'_> {
        LossCurves {
            env_name: "Env",
            algo_name: "DQN",
            losses,
            window,
        }
    }

    #[test]
    fn test_short_series_is_not_smoothed() {
        let losses = vec![1.0; 50];
        assert!(curves(&losses, 50).smoothed().unwrap().is_none());
    }

    #[test]
    fn test_smoothed_points_start_at_window_end() {
        let losses: Vec<f64> = (1..=60).map(|i| i as f64).collect();
        let runs = curves(&losses, 50).smoothed().unwrap().unwrap();
        assert_eq!(runs.len(), 1);
        let points = &runs[0];
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], (49.0, 25.5));
        assert_eq!(points[10], (59.0, 35.5));
    }

    #[test]
    fn test_warmup_zeros_are_skipped() {
        let mut losses = vec![0.0; 10];
        losses.extend((1..=200).map(|i| 1.0 / i as f64));
        let c = curves(&losses, 50);
        assert!(c.validate().is_ok());

        let raw = c.raw_runs();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].len(), 200);
        assert_eq!(raw[0][0], (10.0, 1.0));

        let smoothed = c.smoothed().unwrap().unwrap();
        let drawn: usize = smoothed.iter().map(Vec::len).sum();
        assert_eq!(drawn, 210 - 50 + 1);
        assert!(smoothed.iter().flatten().all(|&(_, y)| y > 0.0));
    }

    #[test]
    fn test_no_positive_loss_rejected() {
        let losses = [0.0, -0.5, f64::NAN];
        assert!(matches!(
            curves(&losses, 50).validate(),
            Err(ReportError::InvalidParameter { .. })
        ));
    }
}
