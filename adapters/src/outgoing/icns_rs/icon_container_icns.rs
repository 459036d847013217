use icns::{IconElement, IconFamily, IconType, Image as IcnsImage, PixelFormat};
use iconsmith_application::{
    config::IconEncodeOptions,
    error::{AppError, AppResult},
    ports::outgoing::icon_container::IconContainerEncoderPort,
};
use image::{ImageFormat, RgbaImage, imageops};
use tracing::{debug, instrument, trace};

use crate::outgoing::image_rs::png_codec_image::{encode_rgba_png, filter_type};

/// Renditions written into every `.icns`. Types with a mask companion are
/// stored as RLE24 + 8-bit mask, the rest as embedded PNG.
const ICON_LADDER: [IconType; 10] = [
    IconType::RGB24_16x16,
    IconType::RGBA32_16x16_2x,
    IconType::RGB24_32x32,
    IconType::RGBA32_32x32_2x,
    IconType::RGB24_128x128,
    IconType::RGBA32_128x128_2x,
    IconType::RGBA32_256x256,
    IconType::RGBA32_256x256_2x,
    IconType::RGBA32_512x512,
    IconType::RGBA32_512x512_2x,
];

#[derive(Clone, Default)]
pub struct IcnsContainerAdapter;

impl IcnsContainerAdapter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, png), fields(bytes = png.len()))]
    fn encode_impl(&self, png: &[u8], options: IconEncodeOptions) -> AppResult<Vec<u8>> {
        let master = image::load_from_memory_with_format(png, ImageFormat::Png)
            .map_err(|e| AppError::EncodeError {
                message: format!("Icon master is not a readable PNG: {e}"),
            })?
            .to_rgba8();

        if master.width() != master.height() {
            return Err(AppError::EncodeError {
                message: format!(
                    "Icon master must be square, got {}x{}",
                    master.width(),
                    master.height()
                ),
            });
        }

        let mut family = IconFamily::new();
        for icon_type in ICON_LADDER {
            let size = icon_type.pixel_width();
            let rendition = imageops::resize(&master, size, size, filter_type(options.resampling));
            trace!("Adding {:?} rendition at {}px", icon_type, size);

            if icon_type.mask_type().is_some() {
                add_masked_icon(&mut family, &rendition, icon_type)?;
            } else {
                let png = encode_rgba_png(rendition.as_raw(), size, size, options.compression)?;
                family
                    .elements
                    .push(IconElement::new(icon_type.ostype(), png));
            }
        }

        let mut icns_bytes = Vec::new();
        family
            .write(&mut icns_bytes)
            .map_err(|e| AppError::EncodeError {
                message: format!("Failed to write ICNS: {e}"),
            })?;

        debug!(
            "Encoded ICNS with {} elements: {} bytes",
            family.elements.len(),
            icns_bytes.len()
        );
        Ok(icns_bytes)
    }
}

fn add_masked_icon(
    family: &mut IconFamily,
    rendition: &RgbaImage,
    icon_type: IconType,
) -> AppResult<()> {
    let mut image = IcnsImage::new(PixelFormat::RGBA, rendition.width(), rendition.height());
    image.data_mut().copy_from_slice(rendition.as_raw());

    family
        .add_icon_with_type(&image, icon_type)
        .map_err(|e| AppError::EncodeError {
            message: format!("Failed to encode {icon_type:?}: {e}"),
        })
}

impl IconContainerEncoderPort for IcnsContainerAdapter {
    fn encode(&self, png: &[u8], options: IconEncodeOptions) -> AppResult<Vec<u8>> {
        self.encode_impl(png, options)
    }
}
