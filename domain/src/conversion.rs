use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::DomainError;

pub const DEFAULT_BASE_NAME: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionKind {
    #[serde(rename = "icns")]
    Icns,
    #[serde(rename = "png-set")]
    PngSet,
}

impl ConversionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icns => "icns",
            Self::PngSet => "png-set",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Icns => "application/x-icns",
            Self::PngSet => "application/zip",
        }
    }

    #[must_use]
    pub const fn filename_suffix(self) -> &'static str {
        match self {
            Self::Icns => ".icns",
            Self::PngSet => "-icons.zip",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "icns" => Ok(Self::Icns),
            "png-set" => Ok(Self::PngSet),
            other => Err(DomainError::UnknownConversionKind(other.to_string())),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub image_bytes: Vec<u8>,
    pub original_filename: Option<String>,
    pub kind: ConversionKind,
}

impl ConversionRequest {
    #[must_use]
    pub fn new(image_bytes: Vec<u8>, original_filename: Option<String>, kind: ConversionKind) -> Self {
        Self {
            image_bytes,
            original_filename,
            kind,
        }
    }

    #[must_use]
    pub fn base_name(&self) -> String {
        derive_base_name(self.original_filename.as_deref())
    }
}

impl fmt::Debug for ConversionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRequest")
            .field("image_bytes", &self.image_bytes.len())
            .field("original_filename", &self.original_filename)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Strips the final `.ext` (the part after the last dot, when it is
/// non-empty and holds no `/`). Missing or empty names become `"image"`,
/// and so do names that are nothing but an extension, such as `".png"`.
#[must_use]
pub fn derive_base_name(filename: Option<&str>) -> String {
    let Some(name) = filename.filter(|name| !name.is_empty()) else {
        return DEFAULT_BASE_NAME.to_string();
    };

    let stem = match name.rsplit_once('.') {
        Some((stem, extension)) if !extension.is_empty() && !extension.contains('/') => stem,
        _ => name,
    };

    if stem.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else {
        stem.to_string()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub suggested_filename: String,
}

impl OutputArtifact {
    #[must_use]
    pub fn for_kind(kind: ConversionKind, base_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: kind.mime_type(),
            suggested_filename: format!("{base_name}{}", kind.filename_suffix()),
        }
    }
}

impl fmt::Debug for OutputArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputArtifact")
            .field("bytes", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .field("suggested_filename", &self.suggested_filename)
            .finish()
    }
}
