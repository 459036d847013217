//! Fixed dimensions of the produced icons.

use crate::geometry::Padding;

/// Edge of the square canvas the source is contained in before padding.
pub const ICNS_CANVAS_SIZE: u32 = 1024;

/// Transparent margin around the ICNS canvas, giving a 1264x1264 master.
pub const ICNS_PADDING: u32 = 120;

pub const ICNS_CORNER_RADIUS: u32 = 250;

pub const ICNS_MASTER_SIZE: u32 = ICNS_CANVAS_SIZE + 2 * ICNS_PADDING;

/// Rendition sizes of the PNG set, in archive order.
pub const PNG_SET_SIZES: [u32; 3] = [16, 48, 128];

pub const ORIGINAL_ENTRY_NAME: &str = "icon.png";

#[must_use]
pub fn icns_padding() -> Padding {
    Padding::uniform(ICNS_PADDING)
}

#[must_use]
pub fn png_set_entry_name(size: u32) -> String {
    format!("icon{size}.png")
}
