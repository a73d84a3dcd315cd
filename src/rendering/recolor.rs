//! Threshold recoloring for notification icons.
//!
//! Android draws notification small icons from the alpha channel only, so the
//! artwork is reduced to a white silhouette: near-white pixels keep their
//! alpha, everything else becomes fully transparent.
//!
//! The rule is pointwise. Each output pixel depends only on the source pixel
//! at the same coordinate.

use crate::models::{Rgba, RgbaImage};

/// Each of R, G and B must be strictly greater than this for a pixel to count
/// as foreground.
pub const FOREGROUND_THRESHOLD: u8 = 200;

/// Foreground/background pixel counts from one recolor pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecolorStats {
    pub foreground: usize,
    pub background: usize,
}

/// True when all three color channels exceed [`FOREGROUND_THRESHOLD`].
///
/// Alpha is not considered.
#[inline]
pub fn is_foreground(pixel: Rgba) -> bool {
    pixel.r() > FOREGROUND_THRESHOLD
        && pixel.g() > FOREGROUND_THRESHOLD
        && pixel.b() > FOREGROUND_THRESHOLD
}

/// Map one source pixel to its notification-icon pixel.
///
/// Foreground becomes white with the original alpha; background becomes
/// white with zero alpha. Anti-aliased edges are not blended: an edge pixel
/// just under the threshold is dropped entirely.
#[inline]
pub fn recolor_pixel(pixel: Rgba) -> Rgba {
    if is_foreground(pixel) {
        Rgba::new(255, 255, 255, pixel.a())
    } else {
        Rgba::TRANSPARENT_WHITE
    }
}

/// Produce a new image of the same dimensions with every pixel recolored.
pub fn to_notification_icon(source: &RgbaImage) -> RgbaImage {
    to_notification_icon_with_stats(source).0
}

/// Like [`to_notification_icon`], also counting foreground and background
/// pixels.
pub fn to_notification_icon_with_stats(source: &RgbaImage) -> (RgbaImage, RecolorStats) {
    let mut stats = RecolorStats::default();
    let mut output = RgbaImage::new(source.width(), source.height());

    for (src, dst) in source
        .as_raw()
        .chunks_exact(4)
        .zip(output.as_raw_mut().chunks_exact_mut(4))
    {
        let pixel = Rgba([src[0], src[1], src[2], src[3]]);
        if is_foreground(pixel) {
            stats.foreground += 1;
        } else {
            stats.background += 1;
        }
        dst.copy_from_slice(&recolor_pixel(pixel).0);
    }

    (output, stats)
}
