use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Statistics for a collection of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    /// Population standard deviation (no degrees-of-freedom correction)
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl Statistics {
    /// Compute statistics from a slice of values
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::from_array(ArrayView1::from(values))
    }

    /// Compute statistics from an array view
    pub fn from_array(values: ArrayView1<f64>) -> Result<Self> {
        let mean = values
            .mean()
            .ok_or_else(|| ReportError::EmptySeries("cannot summarise an empty sequence".to_string()))?;
        let std = values.std(0.0);

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Statistics {
            mean,
            std,
            min,
            max,
            count: values.len(),
        })
    }
}

/// Trailing moving average over `window` samples.
///
/// Equivalent to convolving with a uniform `1 / window` kernel and keeping
/// only the fully-overlapping positions, so the result holds
/// `values.len() - window + 1` points, or none when the input is shorter
/// than the window.
pub fn moving_average(values: &[f64], window: usize) -> Result<Array1<f64>> {
    if window == 0 {
        return Err(ReportError::invalid_parameter(
            "window",
            "smoothing window must be greater than 0",
        ));
    }
    if values.len() < window {
        return Ok(Array1::zeros(0));
    }

    let view = ArrayView1::from(values);
    let scale = window as f64;
    Ok(view
        .windows(window)
        .into_iter()
        .map(|w| w.sum() / scale)
        .collect())
}

/// Equal-width binning of a sample, as drawn by the stability plot
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Every bin is half-open except the last, which also takes the maximum.
    /// A constant sample is centred in a range one unit wide.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(ReportError::invalid_parameter(
                "bins",
                "histogram needs at least one bin",
            ));
        }
        let stats = Statistics::from_slice(values)?;

        let (lo, hi) = if stats.max > stats.min {
            (stats.min, stats.max)
        } else {
            (stats.min - 0.5, stats.max + 0.5)
        };
        let width = (hi - lo) / bins as f64;

        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);
        let mut counts = vec![0; bins];
        for &value in values {
            let bin = (((value - lo) / width).floor() as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Ok(Histogram { edges, counts })
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(left_edge, right_edge, count)` per bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}

/// Relative change of `candidate` against `baseline`, in percent.
///
/// Computed as `(candidate - baseline) / |baseline| * 100`; a zero baseline
/// has no defined relative change and is reported as an error.
pub fn improvement_percentage(baseline: f64, candidate: f64) -> Result<f64> {
    if baseline == 0.0 {
        return Err(ReportError::DivisionByZero(format!(
            "baseline mean is zero, cannot express {} as a relative improvement",
            candidate
        )));
    }
    Ok((candidate - baseline) / baseline.abs() * 100.0)
}

/// Lower and upper bound of the values across several series, ignoring
/// empty ones. Returns `None` when every series is empty.
pub fn value_bounds<'a, I>(series: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    series
        .into_iter()
        .flat_map(|s| s.iter().copied())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_std() {
        let stats = Statistics::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert!((stats.std - 2.0).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_value_bounds_skips_empty() {
        let empty: &[f64] = &[];
        assert_eq!(value_bounds([empty, &[3.0, -1.0][..], &[2.0][..]]), Some((-1.0, 3.0)));
        assert_eq!(value_bounds([empty]), None);
    }
}
