pub mod rgba_image;

pub use rgba_image::{Rgba, RgbaImage};
