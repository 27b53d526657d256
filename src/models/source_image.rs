//! Decoded source image in 8-bit RGBA.

use bead_palette::Rgb;

/// A decoded source image, normalized to 8-bit RGBA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA pixels, `width * height` entries
    pub pixels: Vec<[u8; 4]>,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count must match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// RGBA value at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Iterate `(x, y, rgb)` over pixels that are not fully transparent,
    /// row by row.
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, px)| px[3] != 0)
            .map(move |(i, &[r, g, b, _])| {
                ((i % width) as u32, (i / width) as u32, Rgb::new(r, g, b))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_indexing() {
        let image = SourceImage::new(
            2,
            2,
            vec![[1, 0, 0, 255], [2, 0, 0, 255], [3, 0, 0, 255], [4, 0, 0, 255]],
        );
        assert_eq!(image.pixel(1, 0)[0], 2);
        assert_eq!(image.pixel(0, 1)[0], 3);
    }

    #[test]
    fn test_opaque_pixels_skip_transparent() {
        let image = SourceImage::new(
            3,
            2,
            vec![
                [10, 20, 30, 255],
                [0, 0, 0, 0],
                [40, 50, 60, 1],
                [0, 0, 0, 0],
                [255, 255, 255, 0],
                [7, 8, 9, 128],
            ],
        );
        let opaque: Vec<_> = image.opaque_pixels().collect();
        assert_eq!(
            opaque,
            vec![
                (0, 0, Rgb::new(10, 20, 30)),
                (2, 0, Rgb::new(40, 50, 60)),
                (2, 1, Rgb::new(7, 8, 9)),
            ]
        );
    }
}
