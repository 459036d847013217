use domain::bitmap::Bitmap;
use iconsmith_application::{
    config::{PngCompression, ResamplingFilter},
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};
use image::{
    ExtendedColorType, ImageEncoder, ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
};
use std::io::Cursor;
use tracing::{debug, instrument};

#[derive(Copy, Clone)]
pub struct ImagePngConfig {
    pub resampling: ResamplingFilter,
    pub compression: PngCompression,
}

#[derive(Clone)]
pub struct ImagePngAdapter {
    resampling: ResamplingFilter,
    compression: PngCompression,
}

#[must_use]
pub fn filter_type(resampling: ResamplingFilter) -> FilterType {
    match resampling {
        ResamplingFilter::Nearest => FilterType::Nearest,
        ResamplingFilter::Bilinear => FilterType::Triangle,
        ResamplingFilter::Bicubic => FilterType::CatmullRom,
        ResamplingFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

fn compression_type(compression: PngCompression) -> CompressionType {
    match compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    }
}

/// Encodes raw RGBA8 rows as a PNG.
pub fn encode_rgba_png(
    rgba: &[u8],
    width: u32,
    height: u32,
    compression: PngCompression,
) -> AppResult<Vec<u8>> {
    let mut png_bytes = Vec::new();
    PngEncoder::new_with_quality(
        &mut png_bytes,
        compression_type(compression),
        PngFilterType::Adaptive,
    )
    .write_image(rgba, width, height, ExtendedColorType::Rgba8)
    .map_err(|e| AppError::EncodeError {
        message: format!("Failed to encode PNG: {e}"),
    })?;

    if png_bytes.is_empty() {
        return Err(AppError::EncodeError {
            message: "PNG encoding produced empty output".to_string(),
        });
    }

    Ok(png_bytes)
}

impl ImagePngAdapter {
    pub fn new(config: ImagePngConfig) -> Self {
        Self {
            resampling: config.resampling,
            compression: config.compression,
        }
    }

    #[instrument(skip(self, bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
    fn encode_png_impl(&self, bitmap: &Bitmap) -> AppResult<Vec<u8>> {
        let png_bytes = encode_rgba_png(
            bitmap.as_raw(),
            bitmap.width(),
            bitmap.height(),
            self.compression,
        )?;
        debug!("Encoded PNG: {} bytes", png_bytes.len());
        Ok(png_bytes)
    }

    fn resize_impl(&self, bitmap: &Bitmap, width: u32, height: u32) -> AppResult<Bitmap> {
        let source = to_rgba_image(bitmap)?;
        let resized = imageops::resize(&source, width, height, filter_type(self.resampling));
        Ok(Bitmap::from_rgba(width, height, resized.into_raw())?)
    }
}

#[instrument(skip(encoded), fields(bytes = encoded.len()))]
fn decode_rgba(encoded: &[u8]) -> AppResult<Bitmap> {
    let reader = ImageReader::new(Cursor::new(encoded))
        .with_guessed_format()
        .map_err(|e| AppError::DecodeError {
            message: format!("Failed to read image header: {e}"),
        })?;

    let format = reader.format();
    let img = reader.decode().map_err(|e| AppError::DecodeError {
        message: format!("Failed to decode image: {e}"),
    })?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    debug!("Decoded {:?}: {}x{}", format, width, height);

    Bitmap::from_rgba(width, height, rgba_img.into_raw()).map_err(|e| AppError::DecodeError {
        message: e.to_string(),
    })
}

fn overlay_rgba(canvas: &Bitmap, top: &Bitmap, x: i64, y: i64) -> AppResult<Bitmap> {
    let mut bottom = to_rgba_image(canvas)?;
    imageops::overlay(&mut bottom, &to_rgba_image(top)?, x, y);

    let (width, height) = bottom.dimensions();
    Ok(Bitmap::from_rgba(width, height, bottom.into_raw())?)
}

fn to_rgba_image(bitmap: &Bitmap) -> AppResult<RgbaImage> {
    RgbaImage::from_raw(bitmap.width(), bitmap.height(), bitmap.as_raw().to_vec()).ok_or_else(
        || AppError::DecodeError {
            message: "Failed to create image buffer from RGBA data".to_string(),
        },
    )
}

impl ImageCodecPort for ImagePngAdapter {
    fn decode(&self, encoded: &[u8]) -> AppResult<Bitmap> {
        decode_rgba(encoded)
    }

    fn encode_png(&self, bitmap: &Bitmap) -> AppResult<Vec<u8>> {
        self.encode_png_impl(bitmap)
    }

    fn resize(&self, bitmap: &Bitmap, width: u32, height: u32) -> AppResult<Bitmap> {
        self.resize_impl(bitmap, width, height)
    }

    fn overlay(&self, canvas: &Bitmap, top: &Bitmap, x: i64, y: i64) -> AppResult<Bitmap> {
        overlay_rgba(canvas, top, x, y)
    }
}
