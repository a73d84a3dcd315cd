pub mod image_io;
pub mod recolor;

pub use image_io::{decode_image, encode_png, load_image, optimize_png};
pub use recolor::{
    is_foreground, recolor_pixel, to_notification_icon, to_notification_icon_with_stats,
    RecolorStats, FOREGROUND_THRESHOLD,
};
