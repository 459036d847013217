pub mod icns_rs;
pub mod image_rs;
pub mod tokio_spawn;
pub mod zip_rs;
