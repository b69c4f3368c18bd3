use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use tracing::debug;

use crate::config::ImageFormat;
use crate::error::{ReportError, Result};

/// Series colours, in the order figures assign them
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
];

/// Colour of mean markers
pub const MEAN_COLOR: RGBColor = RED;

const FONT_FAMILY: &str = "sans-serif";

/// Physical size of a figure and the resolution it is rasterised at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Figure {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Canvas size in pixels
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Typographic points to pixels at this figure's resolution
    pub fn pt(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        (FONT_FAMILY, self.pt(points)).into_font()
    }

    pub fn bold_font(&self, points: f64) -> FontDesc<'static> {
        (FONT_FAMILY, self.pt(points), FontStyle::Bold).into_font()
    }
}

/// A figure that can be drawn onto any plotters backend
pub(crate) trait Plot {
    /// Width and height in inches
    fn size_inches(&self) -> (f64, f64);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()>;
}

/// Create `save_dir` if needed and return the path of `stem` inside it
pub(crate) fn output_path(save_dir: &Path, stem: &str, format: ImageFormat) -> Result<PathBuf> {
    fs::create_dir_all(save_dir)?;
    Ok(save_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Draw `plot` and write it to `path`
pub(crate) fn render<P: Plot>(plot: &P, path: &Path, dpi: u32, format: ImageFormat) -> Result<()> {
    let (width_in, height_in) = plot.size_inches();
    let figure = Figure::new(width_in, height_in, dpi);
    let size = figure.pixels();

    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            root.fill(&WHITE)?;
            plot.draw(&root, &figure)?;
            root.present()?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            root.fill(&WHITE)?;
            plot.draw(&root, &figure)?;
            root.present()?;
        }
    }

    debug!(path = %path.display(), width = size.0, height = size.1, "figure written");
    Ok(())
}

/// Pad `[lo, hi]` by `fraction` of its span on both sides; a degenerate
/// range is widened to one unit.
pub(crate) fn padded_range(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    if hi > lo {
        let pad = (hi - lo) * fraction;
        (lo - pad, hi + pad)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// Horizontal dashed line from `x0` to `x1` at height `y`
pub(crate) fn horizontal_dashes(x0: f64, x1: f64, y: f64, dashes: usize) -> Vec<Vec<(f64, f64)>> {
    dash_segments(x0, x1, dashes)
        .into_iter()
        .map(|(a, b)| vec![(a, y), (b, y)])
        .collect()
}

/// Vertical dashed line from `y0` to `y1` at `x`
pub(crate) fn vertical_dashes(y0: f64, y1: f64, x: f64, dashes: usize) -> Vec<Vec<(f64, f64)>> {
    dash_segments(y0, y1, dashes)
        .into_iter()
        .map(|(a, b)| vec![(x, a), (x, b)])
        .collect()
}

// Even dash/gap split of [start, end] into `dashes` strokes.
fn dash_segments(start: f64, end: f64, dashes: usize) -> Vec<(f64, f64)> {
    let dashes = dashes.max(1);
    let period = (end - start) / (2 * dashes - 1) as f64;
    (0..dashes)
        .map(|i| {
            let a = start + 2.0 * i as f64 * period;
            (a, a + period)
        })
        .collect()
}

/// Vertical error bar with caps `cap` wide, in data coordinates
pub(crate) fn error_bar(x: f64, lo: f64, hi: f64, cap: f64) -> [Vec<(f64, f64)>; 3] {
    [
        vec![(x, lo), (x, hi)],
        vec![(x - cap / 2.0, lo), (x + cap / 2.0, lo)],
        vec![(x - cap / 2.0, hi), (x + cap / 2.0, hi)],
    ]
}

/// Reject a series holding NaN or infinite values, which have no place on
/// a linear axis
pub(crate) fn ensure_finite(name: &str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(ReportError::invalid_parameter(
            name.to_string(),
            format!("{} cannot be drawn", bad),
        )),
        None => Ok(()),
    }
}

/// Label of the category centred at `x`, or an empty string for ticks
/// that fall between categories
pub(crate) fn category_label(labels: &[&str], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).map(|l| l.to_string()).unwrap_or_default()
}

/// Tick count for a categorical axis spanning `n` slots, fine enough that
/// every slot centre gets a tick
pub(crate) fn category_ticks(n: usize) -> usize {
    2 * n + 1
}

/// Split `(x, y)` points into runs of consecutive positive, finite `y`
/// values; anything else breaks the line
pub(crate) fn positive_runs<I>(points: I) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        if y > 0.0 && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_pixels_at_300_dpi() {
        let figure = Figure::new(12.0, 6.0, 300);
        assert_eq!(figure.pixels(), (3600, 1800));
        assert_eq!(figure.pt(72.0), 300);
    }

    #[test]
    fn test_dash_segments_cover_range() {
        let dashes = dash_segments(0.0, 9.0, 5);
        assert_eq!(dashes.len(), 5);
        assert_eq!(dashes[0], (0.0, 1.0));
        assert_eq!(dashes[4], (8.0, 9.0));
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range(3.0, 3.0, 0.05), (2.5, 3.5));
        let (lo, hi) = padded_range(0.0, 10.0, 0.1);
        assert!((lo + 1.0).abs() < 1e-12 && (hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_category_label_only_at_centres() {
        let labels = ["0.9", "0.99", "0.999"];
        assert_eq!(category_label(&labels, 0.0), "0.9");
        assert_eq!(category_label(&labels, 2.0), "0.999");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -0.5), "");
        assert_eq!(category_label(&labels, 3.0), "");
    }

    #[test]
    fn test_positive_runs_break_on_gaps() {
        let ys = [0.0, 0.0, 1.0, 0.5, -1.0, f64::NAN, 0.25, f64::INFINITY];
        let runs = positive_runs(ys.iter().enumerate().map(|(i, &y)| (i as f64, y)));
        assert_eq!(runs, vec![vec![(2.0, 1.0), (3.0, 0.5)], vec![(6.0, 0.25)]]);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("rewards", &[1.0, -2.0]).is_ok());
        assert!(matches!(
            ensure_finite("rewards", &[1.0, f64::INFINITY]),
            Err(ReportError::InvalidParameter { .. })
        ));
        assert!(ensure_finite("rewards", &[f64::NAN]).is_err());
    }
}
