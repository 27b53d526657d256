//! Matched bead cells and their SVG composition.

use bead_palette::{Rgb, TextColor};

use crate::models::RenderConfig;

/// One bead: a source pixel mapped to its palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadCell {
    pub x: u32,
    pub y: u32,
    pub fill: Rgb,
    /// Palette entry name, empty in upscale-only mode
    pub label: String,
    pub text: TextColor,
}

/// The matched bead pattern, one cell per non-transparent source pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<BeadCell>,
}

impl BeadGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
        }
    }

    pub fn push(&mut self, cell: BeadCell) {
        self.cells.push(cell);
    }

    /// Number of cells per label, in the order labels first appear.
    ///
    /// Unlabelled cells (upscale-only mode) are not counted.
    pub fn bead_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for cell in self.cells.iter().filter(|c| !c.label.is_empty()) {
            match counts.iter_mut().find(|(name, _)| *name == cell.label) {
                Some((_, n)) => *n += 1,
                None => counts.push((cell.label.clone(), 1)),
            }
        }
        counts
    }

    /// Output size in pixels for the given cell size.
    pub fn pixel_size(&self, cell_size: u32) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(cell_size),
            u64::from(self.height) * u64::from(cell_size),
        )
    }

    /// Compose the pattern as an SVG document.
    ///
    /// Transparent source pixels have no cell and stay transparent.
    pub fn to_svg(&self, config: &RenderConfig) -> String {
        let cell = config.cell_size;
        let (width, height) = self.pixel_size(cell);
        let grid = config.grid_color.to_hex();
        let family = xml_escape(&config.font_family);

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"<g stroke="{grid}" stroke-width="1" shape-rendering="crispEdges">"#
        ));
        svg.push('\n');
        for c in &self.cells {
            let x0 = u64::from(c.x) * u64::from(cell);
            let y0 = u64::from(c.y) * u64::from(cell);
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{cell}" height="{cell}" fill="{}"/>"#,
                x0 as f64 + 0.5,
                y0 as f64 + 0.5,
                c.fill.to_hex(),
            ));
            svg.push('\n');
        }
        svg.push_str("</g>\n");

        if self.cells.iter().any(|c| !c.label.is_empty()) {
            svg.push_str(&format!(
                r#"<g font-family="{family}, sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="central">"#,
                config.font_size
            ));
            svg.push('\n');
            let half = f64::from(cell) / 2.0;
            for c in self.cells.iter().filter(|c| !c.label.is_empty()) {
                let cx = (u64::from(c.x) * u64::from(cell)) as f64 + half;
                let cy = (u64::from(c.y) * u64::from(cell)) as f64 + half;
                svg.push_str(&format!(
                    r#"<text x="{cx}" y="{cy}" fill="{}">{}</text>"#,
                    c.text.to_rgb().to_hex(),
                    xml_escape(&c.label),
                ));
                svg.push('\n');
            }
            svg.push_str("</g>\n");
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Escape text for use in XML content and attribute values.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
