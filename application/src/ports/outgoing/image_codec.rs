use crate::error::AppResult;
use domain::bitmap::Bitmap;
use std::sync::Arc;

pub trait ImageCodecPort: Send + Sync {
    /// Sniffs the format and decodes to straight-alpha RGBA.
    fn decode(&self, encoded: &[u8]) -> AppResult<Bitmap>;
    fn encode_png(&self, bitmap: &Bitmap) -> AppResult<Vec<u8>>;
    /// Resamples to exactly `width` x `height`, ignoring aspect ratio.
    fn resize(&self, bitmap: &Bitmap, width: u32, height: u32) -> AppResult<Bitmap>;
    /// Source-over blend of `top` onto a copy of `canvas`, top-left corner at
    /// (`x`, `y`). Pixels of `top` outside the canvas are dropped.
    fn overlay(&self, canvas: &Bitmap, top: &Bitmap, x: i64, y: i64) -> AppResult<Bitmap>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
