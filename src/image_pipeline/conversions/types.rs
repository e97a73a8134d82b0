//! Encoder configuration types

/// Resampling filter used for the resize-on-encode step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Nearest neighbor (fastest, blocky)
    Nearest,
    /// Linear interpolation (default)
    Triangle,
    /// Cubic interpolation
    CatmullRom,
    /// Lanczos windowed sinc (slowest, sharpest)
    Lanczos3,
}

/// Configuration for source-to-raw encoding.
///
/// The target resolution is a property of the conversion, not of the raw
/// format; the 300x300 default matches the reference fixture generator.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Width of the emitted raw file in pixels
    pub target_width: u32,
    /// Height of the emitted raw file in pixels
    pub target_height: u32,
    /// Resampling filter for the resize step
    pub filter: ResizeFilter,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            target_width: 300,
            target_height: 300,
            filter: ResizeFilter::Triangle,
        }
    }
}

impl EncodeConfig {
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }
}

/// Builder for EncodeConfig
#[derive(Default)]
pub struct EncodeConfigBuilder {
    target_width: Option<u32>,
    target_height: Option<u32>,
    filter: Option<ResizeFilter>,
}

impl EncodeConfigBuilder {
    pub fn target_width(mut self, width: u32) -> Self {
        self.target_width = Some(width);
        self
    }

    pub fn target_height(mut self, height: u32) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(self) -> EncodeConfig {
        let default = EncodeConfig::default();
        EncodeConfig {
            target_width: self.target_width.unwrap_or(default.target_width),
            target_height: self.target_height.unwrap_or(default.target_height),
            filter: self.filter.unwrap_or(default.filter),
        }
    }
}
