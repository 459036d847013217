use iconsmith_application::infrastructure_config::{Config, ConversionConfig};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_endpoint_info(config);
    print_configuration_info(config);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 Endpoints:");
    info!("  🖼️  Convert: POST {}/convert", base_url);
    info!("  💓 Health: GET {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
        info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    }
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration:");
    info!("  🌍 Environment: {}", config.environment.env);
    info!(
        "  📦 Upload limit: {} bytes",
        config.upload.max_body_bytes
    );
    info!(
        "  🔓 CORS origin: {}",
        config.server.cors_origin.as_deref().unwrap_or("any")
    );
    print_conversion_configuration(&config.conversion);
}

fn print_conversion_configuration(conversion: &ConversionConfig) {
    info!(
        "  🎨 Conversion: resampling {}, PNG compression {}, rounded corners {}",
        conversion.resampling,
        conversion.png_compression,
        if conversion.rounded_corners { "on" } else { "off" }
    );
    info!("  ⏱️  Conversion timeout: {}s", conversion.timeout_secs);
}
