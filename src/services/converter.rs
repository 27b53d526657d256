//! Image-to-pattern conversion and output file naming.

use bead_palette::{text_color_for, ColorSpace, MatchError, Palette};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::models::{RenderConfig, SourceImage};
use crate::rendering::{png_codec, BeadCell, BeadGrid, GridRenderer};

/// Outcome of a file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub bytes: usize,
    /// Beads needed per palette entry, in first-seen order
    pub bead_counts: Vec<(String, usize)>,
}

/// Converts source images into bead patterns.
///
/// With a palette every opaque pixel becomes the nearest palette bead,
/// labelled with the entry name. Without one the image is only upscaled:
/// each cell keeps the pixel's own color and carries no label.
pub struct BeadConverter {
    palette: Option<Palette>,
    space: ColorSpace,
    config: RenderConfig,
    renderer: GridRenderer,
}

impl BeadConverter {
    /// Create a converter. An empty palette is rejected up front.
    pub fn new(
        palette: Option<Palette>,
        space: ColorSpace,
        config: RenderConfig,
        renderer: GridRenderer,
    ) -> Result<Self, ConvertError> {
        config.validate()?;
        if let Some(palette) = &palette {
            if palette.is_empty() {
                return Err(MatchError::EmptyPalette.into());
            }
            palette.precompute();
        }
        Ok(Self {
            palette,
            space,
            config,
            renderer,
        })
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn has_palette(&self) -> bool {
        self.palette.is_some()
    }

    /// Match every non-transparent pixel, row by row.
    pub fn convert(&self, image: &SourceImage) -> Result<BeadGrid, ConvertError> {
        let mut grid = BeadGrid::new(image.width, image.height);

        for (x, y, rgb) in image.opaque_pixels() {
            let cell = match &self.palette {
                Some(palette) => {
                    let entry = palette.nearest(self.space, rgb)?;
                    BeadCell {
                        x,
                        y,
                        fill: entry.rgb(),
                        label: entry.name().to_string(),
                        text: entry.text_color(),
                    }
                }
                None => BeadCell {
                    x,
                    y,
                    fill: rgb,
                    label: String::new(),
                    text: text_color_for(rgb),
                },
            };
            grid.push(cell);
        }

        tracing::info!(
            width = image.width,
            height = image.height,
            cells = grid.cells.len(),
            distinct_beads = grid.bead_counts().len(),
            space = %self.space,
            "Converted image"
        );

        Ok(grid)
    }

    /// Render a converted grid to PNG bytes.
    pub fn render(&self, grid: &BeadGrid) -> Result<Vec<u8>, ConvertError> {
        Ok(self.renderer.render_png(grid, &self.config)?)
    }

    /// Decode `input`, convert it and write the pattern PNG to `output`.
    pub fn convert_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let data = std::fs::read(input)?;
        let image = png_codec::decode_png(&data)?;
        let grid = self.convert(&image)?;
        let png_bytes = self.render(&grid)?;
        std::fs::write(output, &png_bytes)?;

        Ok(ConversionReport {
            output: output.to_path_buf(),
            bytes: png_bytes.len(),
            bead_counts: grid.bead_counts(),
        })
    }
}

/// Read and parse a palette file.
pub fn load_palette(path: &Path) -> Result<Palette, ConvertError> {
    let text = std::fs::read_to_string(path)?;
    let palette = Palette::from_config_str(&text)?;
    tracing::info!(path = %path.display(), entries = palette.len(), "Loaded palette");
    Ok(palette)
}

/// Default output file next to the input:
/// `<input without extension>_<bead|big>_<space>.png`.
pub fn output_path(input: &Path, has_palette: bool, space: ColorSpace) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let suffix = if has_palette { "bead" } else { "big" };
    input.with_file_name(format!("{stem}_{suffix}_{space}.png"))
}
