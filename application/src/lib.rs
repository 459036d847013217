#[cfg(any(
    feature = "adapters",
    feature = "axum",
    feature = "image",
    feature = "icns",
    feature = "zip"
))]
compile_error!("application must not depend on adapters/framework crates");

pub mod config;
pub mod contracts;
pub mod convert;
pub mod error;
pub mod infrastructure_config;
pub mod ports;
