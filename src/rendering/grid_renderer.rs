//! Rasterization of bead grids with resvg.

use resvg::usvg::{self, Transform};
use std::path::Path;
use std::sync::Arc;
use tiny_skia::Pixmap;

use super::bead_grid::BeadGrid;
use super::png_codec;
use crate::error::RenderError;
use crate::models::RenderConfig;

/// Largest output image, in pixels, the renderer will allocate.
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Renders bead grids to PNG through an SVG intermediate.
pub struct GridRenderer {
    /// Font database for label rendering
    fontdb: Arc<fontdb::Database>,
}

impl GridRenderer {
    /// Create a renderer with the given font data plus system fonts as fallback
    pub fn with_fonts(fonts: Vec<(String, Vec<u8>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data);
            tracing::debug!(font = %name, "Loaded font");
        }

        fontdb.load_system_fonts();

        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for label rendering");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a renderer with system fonts and the given font files.
    pub fn with_font_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, RenderError> {
        let fonts = paths
            .iter()
            .map(|p| -> Result<_, RenderError> {
                let p = p.as_ref();
                Ok((p.display().to_string(), std::fs::read(p)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_fonts(fonts))
    }

    /// Create a renderer with system fonts only
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Render a bead grid to PNG bytes.
    pub fn render_png(
        &self,
        grid: &BeadGrid,
        config: &RenderConfig,
    ) -> Result<Vec<u8>, RenderError> {
        let (width, height) = check_size(grid, config.cell_size)?;
        let svg = grid.to_svg(config);
        tracing::debug!(width, height, svg_bytes = svg.len(), "Composed pattern SVG");

        let pixmap = self.rasterize_svg(svg.as_bytes(), width, height)?;
        let png_bytes = png_codec::encode_pixmap(&pixmap)?;

        Ok(if config.optimize {
            png_codec::optimize_png(png_bytes)
        } else {
            png_bytes
        })
    }

    /// Parse and rasterize SVG onto a transparent pixmap at 1:1 scale
    fn rasterize_svg(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Output dimensions, or `ImageTooLarge` when they exceed `MAX_OUTPUT_PIXELS`.
fn check_size(grid: &BeadGrid, cell_size: u32) -> Result<(u32, u32), RenderError> {
    let (width, height) = grid.pixel_size(cell_size);
    let too_large = || RenderError::ImageTooLarge {
        width: width.min(u64::from(u32::MAX)) as u32,
        height: height.min(u64::from(u32::MAX)) as u32,
        max: MAX_OUTPUT_PIXELS,
    };
    if width.saturating_mul(height) > MAX_OUTPUT_PIXELS {
        return Err(too_large());
    }
    Ok((
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::BeadCell;
    use bead_palette::{text_color_for, Rgb};

    fn bead(x: u32, y: u32, fill: Rgb) -> BeadCell {
        BeadCell {
            x,
            y,
            fill,
            label: String::new(),
            text: text_color_for(fill),
        }
    }

    fn test_config(cell_size: u32) -> RenderConfig {
        RenderConfig {
            cell_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_check_size_limits() {
        let grid = BeadGrid::new(100, 100);
        assert_eq!(check_size(&grid, 40).unwrap(), (4000, 4000));

        let huge = BeadGrid::new(20_000, 20_000);
        let result = check_size(&huge, 40);
        assert!(matches!(
            result,
            Err(RenderError::ImageTooLarge {
                width: 800_000,
                height: 800_000,
                ..
            })
        ));
    }

    #[test]
    fn test_render_png_dimensions_and_colors() {
        let renderer = GridRenderer::with_fonts(Vec::new());
        let mut grid = BeadGrid::new(2, 2);
        grid.push(bead(0, 0, Rgb::new(255, 0, 0)));
        grid.push(bead(1, 1, Rgb::new(0, 0, 255)));

        let png = renderer.render_png(&grid, &test_config(10)).unwrap();
        let image = png_codec::decode_png(&png).unwrap();

        assert_eq!((image.width, image.height), (20, 20));
        assert_eq!(image.pixel(5, 5), [255, 0, 0, 255]);
        assert_eq!(image.pixel(15, 15), [0, 0, 255, 255]);
        // outline on the cell's top-left edge
        assert_eq!(image.pixel(0, 5), [0, 0, 0, 255]);
        // cells without a bead stay transparent
        assert_eq!(image.pixel(15, 5)[3], 0);
        assert_eq!(image.pixel(5, 15)[3], 0);
    }

    #[test]
    fn test_render_png_optimized() {
        let renderer = GridRenderer::with_fonts(Vec::new());
        let mut grid = BeadGrid::new(1, 1);
        grid.push(bead(0, 0, Rgb::new(10, 200, 30)));
        let config = RenderConfig {
            cell_size: 8,
            optimize: true,
            ..Default::default()
        };

        let png = renderer.render_png(&grid, &config).unwrap();
        let image = png_codec::decode_png(&png).unwrap();
        assert_eq!((image.width, image.height), (8, 8));
        assert_eq!(image.pixel(4, 4), [10, 200, 30, 255]);
    }

    #[test]
    fn test_missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GridRenderer::with_font_files(&[dir.path().join("missing.ttf")]);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
