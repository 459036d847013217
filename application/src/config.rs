use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResamplingFilter {
    #[serde(rename = "nearest")]
    Nearest,
    #[serde(rename = "bilinear")]
    Bilinear,
    #[serde(rename = "bicubic")]
    Bicubic,
    #[serde(rename = "lanczos3")]
    Lanczos3,
}

impl fmt::Display for ResamplingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Lanczos3 => "lanczos3",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PngCompression {
    #[serde(rename = "fast")]
    Fast,
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "best")]
    Best,
}

impl fmt::Display for PngCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fast => "fast",
            Self::Default => "default",
            Self::Best => "best",
        };
        f.write_str(name)
    }
}

/// Hints handed to the icon container encoder along with the master PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEncodeOptions {
    pub resampling: ResamplingFilter,
    pub compression: PngCompression,
}

impl Default for IconEncodeOptions {
    fn default() -> Self {
        Self {
            resampling: ResamplingFilter::Bilinear,
            compression: PngCompression::Default,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionSettings {
    pub rounded_corners: bool,
    pub icon_options: IconEncodeOptions,
}
