use tracing::{instrument, trace};

use domain::{
    bitmap::Bitmap,
    geometry::{ContainFit, Padding, rounded_rect_mask},
};

use crate::{error::AppResult, ports::outgoing::image_codec::DynImageCodecPort};

/// Decode, contain, pad and mask steps shared by both conversion kinds.
/// Resampling and compositing go through the codec port; the corner mask is
/// pixel math on [`Bitmap`].
pub struct Resizer {
    codec: DynImageCodecPort,
}

impl Resizer {
    pub fn new(codec: DynImageCodecPort) -> Self {
        Self { codec }
    }

    #[instrument(skip(self, encoded), fields(bytes = encoded.len()))]
    pub fn decode(&self, encoded: &[u8]) -> AppResult<Bitmap> {
        self.codec.decode(encoded)
    }

    pub fn encode_png(&self, bitmap: &Bitmap) -> AppResult<Vec<u8>> {
        self.codec.encode_png(bitmap)
    }

    /// Scales `bitmap` uniformly to fit inside the target frame and centers
    /// it on a transparent canvas of exactly `target_width` x `target_height`.
    #[instrument(skip(self, bitmap), fields(src_width = bitmap.width(), src_height = bitmap.height()))]
    pub fn resize_contain(
        &self,
        bitmap: &Bitmap,
        target_width: u32,
        target_height: u32,
    ) -> AppResult<Bitmap> {
        debug_assert!(
            target_width > 0 && target_height > 0,
            "contain target must be positive"
        );

        let fit = ContainFit::compute(bitmap.width(), bitmap.height(), target_width, target_height);
        trace!(?fit, "contain placement");

        let scaled = if fit.is_identity(bitmap.width(), bitmap.height()) {
            bitmap.clone()
        } else {
            self.codec.resize(bitmap, fit.width, fit.height)?
        };

        self.codec.overlay(
            &Bitmap::transparent(target_width, target_height),
            &scaled,
            i64::from(fit.offset_x),
            i64::from(fit.offset_y),
        )
    }

    /// Grows `bitmap` by `padding` on a transparent canvas.
    pub fn pad(&self, bitmap: &Bitmap, padding: Padding) -> AppResult<Bitmap> {
        let canvas = Bitmap::transparent(
            bitmap.width() + padding.left + padding.right,
            bitmap.height() + padding.top + padding.bottom,
        );
        self.codec.overlay(
            &canvas,
            bitmap,
            i64::from(padding.left),
            i64::from(padding.top),
        )
    }

    pub fn round_corners(bitmap: &mut Bitmap, radius: u32) -> AppResult<()> {
        let mask = rounded_rect_mask(bitmap.width(), bitmap.height(), radius);
        bitmap.mask_destination_in(&mask)?;
        Ok(())
    }
}
