//! In-memory port fakes for service and pipeline tests.

use std::future::{Future, ready};
use std::pin::Pin;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use domain::{bitmap::Bitmap, conversion::OutputArtifact};

use crate::{
    config::IconEncodeOptions,
    error::{AppError, AppResult},
    ports::outgoing::{
        archive_writer::{ArchiveEntry, ArchiveWriterPort},
        blocking_task::{BlockingConversionPort, ConversionJob},
        icon_container::IconContainerEncoderPort,
        image_codec::ImageCodecPort,
    },
};

const FAKE_MAGIC: &[u8; 4] = b"FAKE";

/// `FAKE` + width (u32 LE) + height (u32 LE) + one RGBA fill color.
pub fn fake_image(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let mut bytes = FAKE_MAGIC.to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&color);
    bytes
}

#[derive(Default)]
pub struct FakeCodec {
    decodes: AtomicUsize,
    resizes: Mutex<Vec<(u32, u32)>>,
    overlays: Mutex<Vec<(i64, i64)>>,
}

impl FakeCodec {
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    pub fn resize_calls(&self) -> Vec<(u32, u32)> {
        self.resizes.lock().unwrap().clone()
    }

    pub fn overlay_calls(&self) -> Vec<(i64, i64)> {
        self.overlays.lock().unwrap().clone()
    }
}

impl ImageCodecPort for FakeCodec {
    fn decode(&self, encoded: &[u8]) -> AppResult<Bitmap> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        let invalid = || AppError::DecodeError {
            message: "not a fake image".to_string(),
        };

        if encoded.len() != 16 || !encoded.starts_with(FAKE_MAGIC) {
            return Err(invalid());
        }
        let width = u32::from_le_bytes(encoded[4..8].try_into().map_err(|_| invalid())?);
        let height = u32::from_le_bytes(encoded[8..12].try_into().map_err(|_| invalid())?);
        let color: [u8; 4] = encoded[12..16].try_into().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Bitmap::filled(width, height, color))
    }

    fn encode_png(&self, bitmap: &Bitmap) -> AppResult<Vec<u8>> {
        let mut bytes = b"PNG".to_vec();
        bytes.extend_from_slice(&bitmap.width().to_le_bytes());
        bytes.extend_from_slice(&bitmap.height().to_le_bytes());
        bytes.extend_from_slice(bitmap.as_raw());
        Ok(bytes)
    }

    fn resize(&self, bitmap: &Bitmap, width: u32, height: u32) -> AppResult<Bitmap> {
        self.resizes.lock().unwrap().push((width, height));
        let mut out = Bitmap::transparent(width, height);
        for y in 0..height {
            for x in 0..width {
                let sx = (u64::from(x) * u64::from(bitmap.width()) / u64::from(width)) as u32;
                let sy = (u64::from(y) * u64::from(bitmap.height()) / u64::from(height)) as u32;
                if let Some(pixel) = bitmap.pixel(sx, sy) {
                    out.put_pixel(x, y, pixel);
                }
            }
        }
        Ok(out)
    }

    /// Copies `top` over the canvas; the fakes only ever place onto
    /// transparent canvases, where source-over is a plain copy.
    fn overlay(&self, canvas: &Bitmap, top: &Bitmap, x: i64, y: i64) -> AppResult<Bitmap> {
        self.overlays.lock().unwrap().push((x, y));
        let mut out = canvas.clone();
        for ty in 0..top.height() {
            for tx in 0..top.width() {
                let (Ok(cx), Ok(cy)) = (
                    u32::try_from(x + i64::from(tx)),
                    u32::try_from(y + i64::from(ty)),
                ) else {
                    continue;
                };
                if let Some(pixel) = top.pixel(tx, ty) {
                    out.put_pixel(cx, cy, pixel);
                }
            }
        }
        Ok(out)
    }
}

/// Reads the dimensions back out of a [`FakeCodec`] PNG.
pub fn fake_png_dimensions(png: &[u8]) -> (u32, u32) {
    assert!(png.starts_with(b"PNG"), "not a fake png");
    let width = u32::from_le_bytes(png[3..7].try_into().unwrap());
    let height = u32::from_le_bytes(png[7..11].try_into().unwrap());
    (width, height)
}

#[derive(Default)]
pub struct RecordingIconEncoder {
    pub fail_with_empty: bool,
    received: Mutex<Vec<(Vec<u8>, IconEncodeOptions)>>,
}

impl RecordingIconEncoder {
    pub fn returning_empty() -> Self {
        Self {
            fail_with_empty: true,
            ..Self::default()
        }
    }

    pub fn received(&self) -> Vec<(Vec<u8>, IconEncodeOptions)> {
        self.received.lock().unwrap().clone()
    }
}

impl IconContainerEncoderPort for RecordingIconEncoder {
    fn encode(&self, png: &[u8], options: IconEncodeOptions) -> AppResult<Vec<u8>> {
        self.received.lock().unwrap().push((png.to_vec(), options));
        if self.fail_with_empty {
            return Ok(Vec::new());
        }
        let mut out = b"icns".to_vec();
        out.extend_from_slice(&u32::try_from(png.len()).unwrap().to_be_bytes());
        Ok(out)
    }
}

#[derive(Default)]
pub struct RecordingArchiveWriter {
    written: Mutex<Vec<ArchiveEntry>>,
}

impl RecordingArchiveWriter {
    pub fn entries(&self) -> Vec<ArchiveEntry> {
        self.written.lock().unwrap().clone()
    }
}

impl ArchiveWriterPort for RecordingArchiveWriter {
    fn write(&self, entries: &[ArchiveEntry]) -> AppResult<Vec<u8>> {
        self.written.lock().unwrap().extend_from_slice(entries);
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        Ok(names.join("\n").into_bytes())
    }
}

pub struct InlineBlockingPort;

impl BlockingConversionPort for InlineBlockingPort {
    fn run(
        &self,
        job: ConversionJob,
    ) -> Pin<Box<dyn Future<Output = AppResult<OutputArtifact>> + Send + 'static>> {
        Box::pin(ready(job()))
    }
}
