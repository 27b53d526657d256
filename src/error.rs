use bead_palette::{MatchError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("Image too large: {width}x{height} pixels (max {max} pixels)")]
    ImageTooLarge { width: u32, height: u32, max: u64 },

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
