pub mod icon_converter;

pub use icon_converter::{ConversionReport, ConvertOptions, IconConverter};
