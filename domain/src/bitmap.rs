use std::fmt;

use crate::error::{DomainError, DomainResult};

pub const BYTES_PER_PIXEL: usize = 4;

/// Straight (non-premultiplied) RGBA pixel.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Row-major RGBA8 raster with straight alpha.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    #[must_use]
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        debug_assert!(width > 0 && height > 0, "bitmap dimensions must be positive");
        let pixel_count = buffer_len(width, height) / BYTES_PER_PIXEL;
        Self {
            width,
            height,
            pixels: color.repeat(pixel_count),
        }
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> DomainResult<Self> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }

        let expected = buffer_len(width, height);
        if pixels.len() != expected {
            return Err(DomainError::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        self.pixels
            .get(start..start + BYTES_PER_PIXEL)
            .and_then(|bytes| bytes.try_into().ok())
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let start = self.offset(x, y);
        if let Some(target) = self.pixels.get_mut(start..start + BYTES_PER_PIXEL) {
            target.copy_from_slice(&color);
        }
    }

    /// Destination-in: keeps this bitmap's color, scales its alpha by the
    /// mask alpha. Fully transparent mask pixels clear the pixel.
    pub fn mask_destination_in(&mut self, mask: &Bitmap) -> DomainResult<()> {
        if self.dimensions() != mask.dimensions() {
            return Err(DomainError::MaskSizeMismatch {
                width: self.width,
                height: self.height,
                mask_width: mask.width,
                mask_height: mask.height,
            });
        }

        for (pixel, mask_pixel) in self
            .pixels
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(mask.pixels.chunks_exact(BYTES_PER_PIXEL))
        {
            if let (Some(alpha), Some(&mask_alpha)) = (pixel.last_mut(), mask_pixel.last()) {
                *alpha = mul_div_255(*alpha, mask_alpha);
            }
        }

        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

fn mul_div_255(a: u8, b: u8) -> u8 {
    let product = (u32::from(a) * u32::from(b) + 127) / 255;
    u8::try_from(product).unwrap_or(u8::MAX)
}
