//! Test fixtures: PNG files built in memory and written to scratch dirs.

use std::path::{Path, PathBuf};

/// Pixel colors resembling the original artwork
pub mod colors {
    /// Body of the white subject
    pub const SUBJECT: (u8, u8, u8, u8) = (250, 250, 250, 255);

    /// Blue background behind the subject
    pub const BACKGROUND: (u8, u8, u8, u8) = (30, 60, 220, 255);

    /// Anti-aliased edge just below the threshold
    pub const EDGE: (u8, u8, u8, u8) = (200, 205, 230, 255);
}

/// Encode RGBA pixels (row-major) as a PNG byte buffer
pub fn rgba_png(width: u32, height: u32, pixels: &[(u8, u8, u8, u8)]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count");
    let data: Vec<u8> = pixels.iter().flat_map(|&(r, g, b, a)| [r, g, b, a]).collect();
    encode(width, height, png::ColorType::Rgba, &data)
}

/// Encode RGB pixels (no alpha channel) as a PNG byte buffer
pub fn rgb_png(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect();
    encode(width, height, png::ColorType::Rgb, &data)
}

fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// A square logo: a white disc on a blue background with a ring of edge pixels
pub fn logo_pixels(size: u32) -> Vec<(u8, u8, u8, u8)> {
    let c = size as i64 / 2;
    let r2 = (size as i64 / 3).pow(2);
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x as i64, y as i64)))
        .map(|(x, y)| {
            let d2 = (x - c).pow(2) + (y - c).pow(2);
            if d2 < r2 {
                colors::SUBJECT
            } else if d2 < r2 + size as i64 {
                colors::EDGE
            } else {
                colors::BACKGROUND
            }
        })
        .collect()
}

/// Write bytes to `dir/name` and return the full path
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Decode an image file into (width, height, RGBA pixels)
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<(u8, u8, u8, u8)>) {
    let bytes = std::fs::read(path).expect("Failed to read PNG");
    let image = notify_icon::rendering::decode_image(&bytes).expect("Invalid PNG");
    let pixels = image.pixels().map(|p| (p.r(), p.g(), p.b(), p.a())).collect();
    (image.width(), image.height(), pixels)
}
