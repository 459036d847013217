pub mod bitmap;
pub mod conversion;
pub mod error;
pub mod geometry;
pub mod icon_layout;
