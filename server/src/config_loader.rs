use iconsmith_application::error::{AppError, AppResult};
use iconsmith_application::infrastructure_config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::fs;
use std::path::Path;
use tracing::info;

const ENV_PREFIX: &str = "ICONSMITH_";

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;
    dotenvy::dotenv().ok();

    let config = build_figment(Path::new("."))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract::<Config>()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

/// Defaults, then `config.toml`, then `config.json` found in `dir`.
fn build_figment(dir: &Path) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    let toml_path = dir.join("config.toml");
    if toml_path.exists() {
        figment = figment.merge(Toml::file(toml_path));
    }

    let json_path = dir.join("config.json");
    if json_path.exists() {
        figment = figment.merge(Json::file(json_path));
    }

    figment
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from {}", template_file);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use iconsmith_application::{
        config::{PngCompression, ResamplingFilter},
        infrastructure_config::LogFormat,
    };

    #[test]
    fn defaults_without_files_or_env() {
        Jail::expect_with(|jail| {
            let config: Config = build_figment(jail.directory())
                .merge(Env::prefixed(ENV_PREFIX).split("__"))
                .extract()?;
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.upload.max_body_bytes, 20 * 1024 * 1024);
            assert!(!config.conversion.rounded_corners);
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [conversion]
                rounded_corners = true
                resampling = "lanczos3"

                [logging]
                format = "json"
                "#,
            )?;
            jail.set_env("ICONSMITH_SERVER__PORT", "8080");
            jail.set_env("ICONSMITH_CONVERSION__PNG_COMPRESSION", "best");

            let config: Config = build_figment(jail.directory())
                .merge(Env::prefixed(ENV_PREFIX).split("__"))
                .extract()?;

            assert_eq!(config.server.port, 8080);
            assert!(config.conversion.rounded_corners);
            assert_eq!(config.conversion.resampling, ResamplingFilter::Lanczos3);
            assert_eq!(config.conversion.png_compression, PngCompression::Best);
            assert!(matches!(config.logging.format, LogFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn unknown_filter_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("ICONSMITH_CONVERSION__RESAMPLING", "sharpest");
            let result = build_figment(jail.directory())
                .merge(Env::prefixed(ENV_PREFIX).split("__"))
                .extract::<Config>();
            assert!(result.is_err());
            Ok(())
        });
    }
}
