use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Default directory figures are written to
pub const DEFAULT_SAVE_DIR: &str = "plots";

/// Default results file read by the loader
pub const DEFAULT_RESULTS_FILE: &str = "results.json";

/// Default path of the LaTeX summary table
pub const DEFAULT_TABLE_PATH: &str = "summary_table.txt";

/// Output image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(ReportError::invalid_parameter(
                "format".to_string(),
                format!("unknown image format '{}', expected png or svg", other),
            )),
        }
    }
}

/// Settings shared by every figure a [`crate::Reporter`] produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory figures are written to; created on demand
    pub save_dir: PathBuf,

    /// Raster resolution in dots per inch
    pub dpi: u32,

    /// Number of trailing samples averaged per smoothed point
    pub smoothing_window: usize,

    /// Bin count of the evaluation reward histogram
    pub histogram_bins: usize,

    pub format: ImageFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            dpi: 300,
            smoothing_window: 50,
            histogram_bins: 20,
            format: ImageFormat::Png,
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no figure can be drawn with
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(ReportError::invalid_parameter("dpi", "dpi must be greater than 0"));
        }
        if self.smoothing_window == 0 {
            return Err(ReportError::invalid_parameter(
                "smoothing_window",
                "smoothing window must be greater than 0",
            ));
        }
        if self.histogram_bins == 0 {
            return Err(ReportError::invalid_parameter(
                "histogram_bins",
                "histogram needs at least one bin",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"dpi": 100, "format": "svg"}"#).unwrap();
        assert_eq!(config.dpi, 100);
        assert_eq!(config.format, ImageFormat::Svg);
        assert_eq!(config.smoothing_window, 50);
        assert_eq!(config.save_dir, PathBuf::from("plots"));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = ReportConfig {
            smoothing_window: 0,
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidParameter { ref name, .. }) if name == "smoothing_window"
        ));
    }

    #[test]
    fn test_image_format_from_str() {
        assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert!(matches!(
            "jpeg".parse::<ImageFormat>(),
            Err(ReportError::InvalidParameter { .. })
        ));
    }
}
