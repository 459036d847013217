// keep public for OpenAPI docs
pub mod convert;
pub mod health;
