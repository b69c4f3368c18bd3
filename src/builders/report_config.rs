use std::path::PathBuf;

use crate::config::{ImageFormat, ReportConfig};
use crate::error::Result;
use crate::reporter::Reporter;

/// Builder for ReportConfig
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Create a new builder starting from the default settings
    pub fn new() -> Self {
        ReportConfigBuilder {
            config: ReportConfig::default(),
        }
    }
    
    /// Set the directory figures are written to
    pub fn save_dir<P: Into<PathBuf>>(mut self, save_dir: P) -> Self {
        self.config.save_dir = save_dir.into();
        self
    }
    
    /// Set the raster resolution
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }
    
    /// Set the moving-average window
    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.config.smoothing_window = window;
        self
    }
    
    /// Set the bin count of the reward histogram
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.config.histogram_bins = bins;
        self
    }
    
    /// Write SVG instead of PNG
    pub fn svg(mut self) -> Self {
        self.config.format = ImageFormat::Svg;
        self
    }
    
    /// Set the output encoding
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.config.format = format;
        self
    }
    
    /// Build the config
    pub fn build(self) -> Result<ReportConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
    
    /// Build a reporter around the config
    pub fn build_reporter(self) -> Result<Reporter> {
        Ok(Reporter::new(self.build()?))
    }
}

impl Default for ReportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_report_config_builder() {
        let config = ReportConfigBuilder::new()
            .save_dir("figures")
            .dpi(150)
            .smoothing_window(10)
            .histogram_bins(8)
            .svg()
            .build()
            .unwrap();
        
        assert_eq!(config.save_dir, PathBuf::from("figures"));
        assert_eq!(config.dpi, 150);
        assert_eq!(config.smoothing_window, 10);
        assert_eq!(config.histogram_bins, 8);
        assert_eq!(config.format, ImageFormat::Svg);
    }
    
    #[test]
    fn test_builder_errors() {
        // Zero dpi
        let result = ReportConfigBuilder::new().dpi(0).build();
        assert!(result.is_err());
        
        // Zero window
        let result = ReportConfigBuilder::new().smoothing_window(0).build();
        assert!(result.is_err());
        
        // Zero bins
        let result = ReportConfigBuilder::new().histogram_bins(0).build_reporter();
        assert!(result.is_err());
    }
}
