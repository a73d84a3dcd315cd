//! Image loading and PNG encoding for RGBA8 icon grids.

use crate::error::IconError;
use crate::models::RgbaImage;
use std::io::Cursor;
use std::path::Path;

/// Open and decode an image file into RGBA8.
///
/// The existence check runs first, so a missing path is reported as
/// [`IconError::InputNotFound`] without touching the decoder. The format is
/// detected from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<RgbaImage, IconError> {
    if !path.exists() {
        return Err(IconError::InputNotFound(path.to_path_buf()));
    }
    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let image = into_rgba_image(decoded)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );
    Ok(image)
}

/// Decode in-memory image data of any supported format into RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, IconError> {
    into_rgba_image(image::load_from_memory(bytes)?)
}

fn into_rgba_image(decoded: image::DynamicImage) -> Result<RgbaImage, IconError> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    RgbaImage::from_raw(width, height, rgba.into_raw())
}

/// Encode an RGBA8 grid as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng.
///
/// Alpha optimization stays off so the RGB of transparent pixels is kept as
/// written. Falls back to the input bytes if oxipng rejects them.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized encoding");
            png_bytes
        }
    }
}
