use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{
    category_label, category_ticks, ensure_finite, error_bar, padded_range, Figure, Plot, PALETTE,
};
use crate::error::{ReportError, Result};
use crate::results::{algorithm_result, AlgorithmResult, Results, DDQN, DQN};

const BAR_WIDTH: f64 = 0.35;

/// Grouped DQN/DDQN bars for every environment in a results mapping
pub(crate) struct EnvironmentsComparison<'a> {
    /// `(environment, dqn, ddqn)` in mapping order
    pub rows: Vec<(&'a str, &'a AlgorithmResult, &'a AlgorithmResult)>,
}

impl<'a> EnvironmentsComparison<'a> {
    pub fn from_results(results: &'a Results) -> Result<Self> {
        if results.is_empty() {
            return Err(ReportError::EmptySeries("results hold no environments".to_string()));
        }
        let rows = results
            .iter()
            .map(|(env, algos)| {
                Ok((
                    env.as_str(),
                    algorithm_result(env, algos, DQN)?,
                    algorithm_result(env, algos, DDQN)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        for (env, dqn, ddqn) in &rows {
            ensure_finite(env, &[dqn.mean, dqn.std, ddqn.mean, ddqn.std])?;
        }
        Ok(EnvironmentsComparison { rows })
    }

    pub fn file_stem(&self) -> String {
        "all_environments_comparison".to_string()
    }
}

impl Plot for EnvironmentsComparison<'_> {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 7.0)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
        let n = self.rows.len();
        let bounds = self
            .rows
            .iter()
            .flat_map(|(_, dqn, ddqn)| [*dqn, *ddqn])
            .map(|r| (r.mean - r.std, r.mean + r.std))
            .fold((0.0f64, 0.0f64), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
        let (y_lo, y_hi) = padded_range(bounds.0, bounds.1, 0.08);
        let y_lo = if bounds.0 >= 0.0 { 0.0 } else { y_lo };

        let labels: Vec<&str> = self.rows.iter().map(|(env, _, _)| *env).collect();

        let mut chart = ChartBuilder::on(root)
            .caption("DQN vs DDQN Performance Comparison", figure.bold_font(16.0))
            .margin(figure.pt(10.0))
            .x_label_area_size(figure.pt(48.0))
            .y_label_area_size(figure.pt(64.0))
            .build_cartesian_2d(-0.6f64..n as f64 - 0.4, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.15))
            .x_labels(category_ticks(n))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .x_desc("Environment")
            .y_desc("Average Reward (100 episodes)")
            .axis_desc_style(figure.bold_font(14.0))
            .label_style(figure.font(10.0))
            .draw()?;

        let edge = BLACK.stroke_width(figure.pt(0.75));
        let whisker = BLACK.stroke_width(figure.pt(1.0));
        let value_style = TextStyle::from(figure.font(10.0)).pos(Pos::new(HPos::Center, VPos::Bottom));
        let value_offset = figure.pt(3.0) as i32;
        let sample = figure.pt(20.0) as i32;

        let groups = [(DQN, -BAR_WIDTH / 2.0, PALETTE[0]), (DDQN, BAR_WIDTH / 2.0, PALETTE[1])];
        for (index, (name, offset, color)) in groups.into_iter().enumerate() {
            let bars: Vec<(f64, &AlgorithmResult)> = self
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| (i as f64 + offset, if index == 0 { row.1 } else { row.2 }))
                .collect();

            let fill = color.mix(0.8).filled();
            chart
                .draw_series(bars.iter().map(|&(x, r)| {
                    Rectangle::new([(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, r.mean)], fill)
                }))?
                .label(name)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - sample / 4), (x + sample, y + sample / 4)], fill)
                });
            chart.draw_series(bars.iter().map(|&(x, r)| {
                Rectangle::new([(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, r.mean)], edge)
            }))?;
            chart.draw_series(bars.iter().flat_map(|&(x, r)| {
                error_bar(x, r.mean - r.std, r.mean + r.std, BAR_WIDTH / 4.0)
                    .into_iter()
                    .map(move |points| PathElement::new(points, whisker))
            }))?;
            chart.draw_series(bars.iter().map(|&(x, r)| {
                EmptyElement::at((x, r.mean))
                    + Text::new(format!("{:.1}", r.mean), (0, -value_offset), value_style.clone())
            }))?;
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
