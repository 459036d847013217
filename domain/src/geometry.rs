use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    #[must_use]
    pub fn uniform(amount: u32) -> Self {
        Self {
            top: amount,
            bottom: amount,
            left: amount,
            right: amount,
        }
    }
}

/// Placement of a source scaled to fit entirely inside a target frame.
///
/// The scale factor is `min(target_w / src_w, target_h / src_h)`; the scaled
/// size is rounded to whole pixels and centered, leaving transparent bands
/// on the short axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainFit {
    pub width: u32,
    pub height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl ContainFit {
    #[must_use]
    pub fn compute(src_width: u32, src_height: u32, target_width: u32, target_height: u32) -> Self {
        debug_assert!(
            src_width > 0 && src_height > 0,
            "source dimensions must be positive"
        );
        debug_assert!(
            target_width > 0 && target_height > 0,
            "target dimensions must be positive"
        );

        let scale = (f64::from(target_width) / f64::from(src_width))
            .min(f64::from(target_height) / f64::from(src_height));

        let width = scaled_extent(src_width, scale, target_width);
        let height = scaled_extent(src_height, scale, target_height);

        Self {
            width,
            height,
            offset_x: (target_width - width) / 2,
            offset_y: (target_height - height) / 2,
        }
    }

    #[must_use]
    pub fn is_identity(&self, src_width: u32, src_height: u32) -> bool {
        self.width == src_width && self.height == src_height
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_extent(extent: u32, scale: f64, limit: u32) -> u32 {
    let scaled = (f64::from(extent) * scale).round() as u32;
    scaled.clamp(1, limit)
}

const MASK_SUBSAMPLES: u32 = 4;

/// White rounded rectangle covering the whole frame, transparent outside the
/// corner arcs. Corner edges carry fractional coverage from 4x4 subsampling.
#[must_use]
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> Bitmap {
    let radius = radius.min(width / 2).min(height / 2);
    let mut mask = Bitmap::filled(width, height, [255, 255, 255, 255]);
    if radius == 0 {
        return mask;
    }

    let corner_xs = (0..radius).chain(width - radius..width);
    let corner_ys: Vec<u32> = (0..radius).chain(height - radius..height).collect();

    for x in corner_xs {
        for &y in &corner_ys {
            let alpha = corner_coverage(x, y, width, height, radius);
            mask.put_pixel(x, y, [255, 255, 255, alpha]);
        }
    }

    mask
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn corner_coverage(x: u32, y: u32, width: u32, height: u32, radius: u32) -> u8 {
    let r = f64::from(radius);
    let (w, h) = (f64::from(width), f64::from(height));
    let step = 1.0 / f64::from(MASK_SUBSAMPLES);

    let mut inside = 0u32;
    for sub_y in 0..MASK_SUBSAMPLES {
        for sub_x in 0..MASK_SUBSAMPLES {
            let px = f64::from(x) + (f64::from(sub_x) + 0.5) * step;
            let py = f64::from(y) + (f64::from(sub_y) + 0.5) * step;
            let cx = px.clamp(r, w - r);
            let cy = py.clamp(r, h - r);
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= r * r {
                inside += 1;
            }
        }
    }

    let total = MASK_SUBSAMPLES * MASK_SUBSAMPLES;
    ((inside * 255 + total / 2) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_is_letterboxed_vertically() {
        let fit = ContainFit::compute(2000, 500, 1024, 1024);
        assert_eq!(
            fit,
            ContainFit {
                width: 1024,
                height: 256,
                offset_x: 0,
                offset_y: 384,
            }
        );
    }

    #[test]
    fn tall_source_is_pillarboxed() {
        let fit = ContainFit::compute(300, 600, 128, 128);
        assert_eq!(fit.width, 64);
        assert_eq!(fit.height, 128);
        assert_eq!(fit.offset_x, 32);
        assert_eq!(fit.offset_y, 0);
    }

    #[test]
    fn small_source_is_upscaled() {
        let fit = ContainFit::compute(10, 10, 48, 48);
        assert!(fit.is_identity(48, 48));
        assert_eq!((fit.offset_x, fit.offset_y), (0, 0));
    }

    #[test]
    fn extreme_aspect_ratio_keeps_one_pixel() {
        let fit = ContainFit::compute(10_000, 1, 16, 16);
        assert_eq!((fit.width, fit.height), (16, 1));
        assert_eq!(fit.offset_y, 7);
    }

    #[test]
    fn scale_matches_min_ratio_within_a_pixel() {
        for &(sw, sh, tw, th) in &[(640, 480, 16, 16), (33, 97, 48, 48), (1000, 999, 128, 128)] {
            let fit = ContainFit::compute(sw, sh, tw, th);
            let scale = (f64::from(tw) / f64::from(sw)).min(f64::from(th) / f64::from(sh));
            assert!((f64::from(fit.width) - f64::from(sw) * scale).abs() <= 1.0);
            assert!((f64::from(fit.height) - f64::from(sh) * scale).abs() <= 1.0);
            assert!(fit.width <= tw && fit.height <= th);
        }
    }

    #[test]
    fn rounded_mask_clears_corners_and_keeps_center() {
        let mask = rounded_rect_mask(1024, 1024, 250);

        assert_eq!(mask.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(mask.pixel(1023, 1023).map(|p| p[3]), Some(0));
        assert_eq!(mask.pixel(512, 512).map(|p| p[3]), Some(255));
        assert_eq!(mask.pixel(512, 0).map(|p| p[3]), Some(255));
        assert_eq!(mask.pixel(0, 512).map(|p| p[3]), Some(255));
        assert_eq!(mask.pixel(250, 250).map(|p| p[3]), Some(255));
    }

    #[test]
    fn rounded_mask_radius_is_clamped() {
        let mask = rounded_rect_mask(8, 8, 100);
        assert_eq!(mask.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(mask.pixel(4, 4).map(|p| p[3]), Some(255));
    }

    #[test]
    fn zero_radius_mask_is_opaque() {
        let mask = rounded_rect_mask(4, 4, 0);
        assert!(mask.as_raw().chunks_exact(4).all(|p| p[3] == 255));
    }
}
