//! Test fixtures: small source images and palette files.

use std::path::{Path, PathBuf};

use beadify::models::SourceImage;
use beadify::rendering::png_codec;

/// Palette with saturated primaries plus black and white
pub const PRIMARY_PALETTE: &str = "\
# bead set used by the tests
[Palette]
Red = 255,0,0     # primary
green = 0,255,0
blue: 0,0,255
white = 255,255,255  # #ffffff
black = 0,0,0
";

/// Write an RGBA image as PNG and return its path
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    pixels: &[[u8; 4]],
) -> PathBuf {
    let rgba: Vec<u8> = pixels.iter().flatten().copied().collect();
    let bytes = png_codec::encode_rgba_png(width, height, &rgba).expect("encode fixture PNG");
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture PNG");
    path
}

/// Write a palette file and return its path
pub fn write_palette(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("palette.ini");
    std::fs::write(&path, contents).expect("write palette file");
    path
}

/// Decode an output PNG from disk
pub fn read_png(path: &Path) -> SourceImage {
    let bytes = std::fs::read(path).expect("read output PNG");
    png_codec::decode_png(&bytes).expect("decode output PNG")
}

/// 2x2 image: near-red, transparent, near-blue, near-white
pub fn sample_pixels() -> Vec<[u8; 4]> {
    vec![
        [240, 20, 10, 255],
        [0, 0, 0, 0],
        [10, 15, 230, 255],
        [250, 250, 245, 255],
    ]
}
