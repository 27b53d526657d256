//! Named palette color with memoized color-space coordinates.

use std::sync::OnceLock;

use crate::color::{Hsv, Rgb, Yuv};
use crate::metric::{distance_rgb, text_color_for, ColorSpace, TextColor};

/// One named color of a palette.
///
/// The entry's YUV and HSV coordinates are computed on first use by the
/// matching metric and kept for the entry's lifetime. The query side of a
/// distance is always converted fresh, since it changes with every pixel.
///
/// The caches are [`OnceLock`]s, so an entry can be shared between threads;
/// call [`precompute()`](Self::precompute) to fill them up front.
///
/// # Example
///
/// ```
/// use bead_palette::{ColorSpace, PaletteEntry, Rgb};
///
/// let entry = PaletteEntry::new("red", Rgb::new(255, 0, 0));
/// assert!(entry.cached_yuv().is_none());
///
/// let d = entry.distance_to(ColorSpace::Yuv, Rgb::new(250, 5, 5));
/// assert!(d > 0.0);
/// assert!(entry.cached_yuv().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    name: String,
    rgb: Rgb,
    yuv: OnceLock<Yuv>,
    hsv: OnceLock<Hsv>,
}

impl PaletteEntry {
    /// Create an entry. Derived coordinates start unset.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
            yuv: OnceLock::new(),
            hsv: OnceLock::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// YUV coordinates, computed on first call.
    #[inline]
    pub fn yuv(&self) -> Yuv {
        *self.yuv.get_or_init(|| Yuv::from(self.rgb))
    }

    /// HSV coordinates, computed on first call.
    #[inline]
    pub fn hsv(&self) -> Hsv {
        *self.hsv.get_or_init(|| Hsv::from(self.rgb))
    }

    /// YUV coordinates if they have been computed already.
    pub fn cached_yuv(&self) -> Option<Yuv> {
        self.yuv.get().copied()
    }

    /// HSV coordinates if they have been computed already.
    pub fn cached_hsv(&self) -> Option<Hsv> {
        self.hsv.get().copied()
    }

    /// Fill both coordinate caches.
    pub fn precompute(&self) {
        self.yuv();
        self.hsv();
    }

    /// Distance from this entry to a query color.
    pub fn distance_to(&self, space: ColorSpace, rgb: Rgb) -> f64 {
        match space {
            ColorSpace::Rgb { red_mean } => distance_rgb(self.rgb, rgb, red_mean),
            ColorSpace::Yuv => self.yuv().distance(Yuv::from(rgb)),
            ColorSpace::Hsv => self.hsv().distance(Hsv::from(rgb)),
        }
    }

    /// Label color for text drawn on this entry's color.
    #[inline]
    pub fn text_color(&self) -> TextColor {
        text_color_for(self.rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::RedMean;

    #[test]
    fn test_caches_start_empty() {
        let entry = PaletteEntry::new("teal", Rgb::new(0, 128, 128));
        assert_eq!(entry.name(), "teal");
        assert_eq!(entry.rgb(), Rgb::new(0, 128, 128));
        assert!(entry.cached_yuv().is_none());
        assert!(entry.cached_hsv().is_none());
    }

    #[test]
    fn test_rgb_queries_do_not_populate_caches() {
        let entry = PaletteEntry::new("teal", Rgb::new(0, 128, 128));
        entry.distance_to(ColorSpace::default(), Rgb::WHITE);
        entry.distance_to(
            ColorSpace::Rgb {
                red_mean: RedMean::Average,
            },
            Rgb::WHITE,
        );
        assert!(entry.cached_yuv().is_none());
        assert!(entry.cached_hsv().is_none());
    }

    #[test]
    fn test_each_space_populates_only_its_cache() {
        let entry = PaletteEntry::new("teal", Rgb::new(0, 128, 128));

        entry.distance_to(ColorSpace::Hsv, Rgb::WHITE);
        assert!(entry.cached_hsv().is_some());
        assert!(entry.cached_yuv().is_none());

        entry.distance_to(ColorSpace::Yuv, Rgb::WHITE);
        assert_eq!(entry.cached_yuv(), Some(Yuv::from(Rgb::new(0, 128, 128))));
    }

    #[test]
    fn test_cached_value_is_reused() {
        let entry = PaletteEntry::new("grey", Rgb::new(90, 90, 90));
        let first = entry.distance_to(ColorSpace::Yuv, Rgb::new(10, 20, 30));
        let cached = entry.cached_yuv().unwrap();
        let second = entry.distance_to(ColorSpace::Yuv, Rgb::new(10, 20, 30));
        assert_eq!(first, second);
        assert_eq!(entry.cached_yuv().unwrap(), cached);
    }

    #[test]
    fn test_precompute_fills_both() {
        let entry = PaletteEntry::new("olive", Rgb::new(128, 128, 0));
        entry.precompute();
        assert_eq!(entry.cached_hsv(), Some(Hsv::from(Rgb::new(128, 128, 0))));
        assert!(entry.cached_yuv().is_some());
    }

    #[test]
    fn test_distance_matches_color_space() {
        let entry = PaletteEntry::new("orange", Rgb::new(255, 165, 0));
        let query = Rgb::new(200, 90, 40);
        for space in [ColorSpace::default(), ColorSpace::Yuv, ColorSpace::Hsv] {
            assert_eq!(
                entry.distance_to(space, query),
                space.distance(entry.rgb(), query),
                "{space} distance differs from metric"
            );
        }
    }

    #[test]
    fn test_text_color() {
        assert_eq!(
            PaletteEntry::new("white", Rgb::WHITE).text_color(),
            TextColor::Black
        );
        assert_eq!(
            PaletteEntry::new("navy", Rgb::new(0, 0, 128)).text_color(),
            TextColor::White
        );
    }
}
