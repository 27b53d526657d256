pub mod converter;

pub use converter::{load_palette, output_path, BeadConverter, ConversionReport};
