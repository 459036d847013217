use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{ConversionSettings, IconEncodeOptions, PngCompression, ResamplingFilter};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub rounded_corners: bool,
    pub resampling: ResamplingFilter,
    pub png_compression: PngCompression,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
            },
            upload: UploadConfig {
                max_body_bytes: 20 * 1024 * 1024,
            },
            conversion: ConversionConfig {
                rounded_corners: false,
                resampling: ResamplingFilter::Bilinear,
                png_compression: PngCompression::Default,
                timeout_secs: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "server host cannot be empty".to_string(),
            });
        }

        if self.upload.max_body_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "max_body_bytes must be greater than 0".to_string(),
            });
        }

        if self.conversion.timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "conversion timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn conversion_timeout(&self) -> Duration {
        Duration::from_secs(self.conversion.timeout_secs)
    }

    #[must_use]
    pub fn conversion_settings(&self) -> ConversionSettings {
        ConversionSettings {
            rounded_corners: self.conversion.rounded_corners,
            icon_options: IconEncodeOptions {
                resampling: self.conversion.resampling,
                compression: self.conversion.png_compression,
            },
        }
    }
}
