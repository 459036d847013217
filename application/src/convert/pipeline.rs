use tracing::{debug, instrument};

use domain::{
    bitmap::Bitmap,
    conversion::{ConversionKind, ConversionRequest, OutputArtifact},
    icon_layout::{
        ICNS_CANVAS_SIZE, ICNS_CORNER_RADIUS, ORIGINAL_ENTRY_NAME, PNG_SET_SIZES, icns_padding,
        png_set_entry_name,
    },
};

use crate::{
    config::ConversionSettings,
    error::{AppError, AppResult},
    ports::outgoing::{
        archive_writer::{ArchiveEntry, DynArchiveWriterPort},
        icon_container::DynIconContainerEncoderPort,
        image_codec::DynImageCodecPort,
    },
};

use super::resizer::Resizer;

pub struct PipelineDeps {
    pub codec_port: DynImageCodecPort,
    pub icon_encoder_port: DynIconContainerEncoderPort,
    pub archive_writer_port: DynArchiveWriterPort,
}

/// Synchronous, CPU-bound part of a conversion. Holds no per-request state.
pub struct ConversionPipeline {
    resizer: Resizer,
    icon_encoder: DynIconContainerEncoderPort,
    archive_writer: DynArchiveWriterPort,
    settings: ConversionSettings,
}

impl ConversionPipeline {
    pub fn new(settings: ConversionSettings, deps: PipelineDeps) -> Self {
        Self {
            resizer: Resizer::new(deps.codec_port),
            icon_encoder: deps.icon_encoder_port,
            archive_writer: deps.archive_writer_port,
            settings,
        }
    }

    #[instrument(skip(self, request), fields(kind = %request.kind, bytes = request.image_bytes.len()))]
    pub fn run(&self, request: &ConversionRequest) -> AppResult<OutputArtifact> {
        let bytes = match request.kind {
            ConversionKind::Icns => self.build_icns(&request.image_bytes)?,
            ConversionKind::PngSet => self.build_png_set(&request.image_bytes)?,
        };

        Ok(OutputArtifact::for_kind(
            request.kind,
            &request.base_name(),
            bytes,
        ))
    }

    /// Decoded source contained in the 1024 frame, optionally rounded, then
    /// padded to 1264x1264.
    pub fn icns_master(&self, image_bytes: &[u8]) -> AppResult<Bitmap> {
        let source = self.resizer.decode(image_bytes)?;
        let mut canvas =
            self.resizer
                .resize_contain(&source, ICNS_CANVAS_SIZE, ICNS_CANVAS_SIZE)?;

        if self.settings.rounded_corners {
            Resizer::round_corners(&mut canvas, ICNS_CORNER_RADIUS)?;
        }

        self.resizer.pad(&canvas, icns_padding())
    }

    pub fn build_icns(&self, image_bytes: &[u8]) -> AppResult<Vec<u8>> {
        let master = self.icns_master(image_bytes)?;
        let png = self.resizer.encode_png(&master)?;
        debug!("Encoded {}x{} master: {} bytes", master.width(), master.height(), png.len());

        let icns = self.icon_encoder.encode(&png, self.settings.icon_options)?;
        if icns.is_empty() {
            return Err(AppError::EncodeError {
                message: "icon container encoder produced no output".to_string(),
            });
        }

        debug!("Encoded ICNS: {} bytes", icns.len());
        Ok(icns)
    }

    pub fn png_set_entries(&self, image_bytes: &[u8]) -> AppResult<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(PNG_SET_SIZES.len() + 1);
        entries.push(ArchiveEntry::new(ORIGINAL_ENTRY_NAME, image_bytes.to_vec()));

        for size in PNG_SET_SIZES {
            // fresh decode per size, renditions are never derived from each other
            let source = self.resizer.decode(image_bytes)?;
            let rendition = self.resizer.resize_contain(&source, size, size)?;
            let png = self.resizer.encode_png(&rendition)?;
            entries.push(ArchiveEntry::new(png_set_entry_name(size), png));
        }

        Ok(entries)
    }

    pub fn build_png_set(&self, image_bytes: &[u8]) -> AppResult<Vec<u8>> {
        let entries = self.png_set_entries(image_bytes)?;
        let archive = self.archive_writer.write(&entries)?;
        debug!("Wrote {} archive entries: {} bytes", entries.len(), archive.len());
        Ok(archive)
    }
}
