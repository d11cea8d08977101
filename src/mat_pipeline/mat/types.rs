//! Conversion configuration types

/// Resampling filters for dimension normalization
#[derive(Debug, Clone, Copy)]
pub enum ResizeFilter {
    /// Nearest neighbour (fastest, blocky)
    Nearest,
    /// Bilinear interpolation (default, matches the downstream tooling)
    Bilinear,
    /// Catmull-Rom cubic interpolation
    CatmullRom,
    /// Lanczos windowed sinc (slowest, sharpest)
    Lanczos3,
}

impl From<ResizeFilter> for image::imageops::FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Configuration for image to MAT conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Resampling filter used when the input is not already 640x480
    pub filter: ResizeFilter,
    /// Whether batch mode matches file extensions case-insensitively,
    /// so `.PNG` files are not silently skipped
    pub case_insensitive_extensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            filter: ResizeFilter::Bilinear,
            case_insensitive_extensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    filter: Option<ResizeFilter>,
    case_insensitive_extensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn case_insensitive_extensions(mut self, enable: bool) -> Self {
        self.case_insensitive_extensions = Some(enable);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            filter: self.filter.unwrap_or(default.filter),
            case_insensitive_extensions: self
                .case_insensitive_extensions
                .unwrap_or(default.case_insensitive_extensions),
        }
    }
}
