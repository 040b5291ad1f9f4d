//! PNG/base64 conversion for images carried in chat messages.
//!
//! This is the only place the crate touches the raster codec. Outbound images
//! always go out as PNG; inbound payloads may use any format the codec reads.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};

use crate::error::{ChatError, Result};

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(ChatError::ImageEncode)?;
    Ok(bytes)
}

pub fn encode_png_base64(image: &DynamicImage) -> Result<String> {
    Ok(STANDARD.encode(encode_png(image)?))
}

pub fn decode_base64_image(payload: &str) -> Result<DynamicImage> {
    let bytes = STANDARD.decode(payload)?;
    image::load_from_memory(&bytes).map_err(ChatError::ImageDecode)
}
