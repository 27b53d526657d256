//! Ordered palette with nearest-color matching.

use super::entry::PaletteEntry;
use super::error::MatchError;
use crate::color::Rgb;
use crate::metric::ColorSpace;

/// An ordered set of named colors.
///
/// Entries keep insertion order (file order when loaded from a palette file).
/// Order does not affect which color is nearest except on exact ties, where
/// the earliest entry wins.
///
/// # Example
///
/// ```
/// use bead_palette::{ColorSpace, Palette, PaletteEntry, Rgb};
///
/// let mut palette = Palette::new();
/// palette.add(PaletteEntry::new("black", Rgb::BLACK));
/// palette.add(PaletteEntry::new("white", Rgb::WHITE));
///
/// let best = palette.nearest(ColorSpace::default(), Rgb::new(30, 30, 30)).unwrap();
/// assert_eq!(best.name(), "black");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Names are not checked for uniqueness.
    pub fn add(&mut self, entry: PaletteEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// First entry with the given name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Fill every entry's coordinate caches.
    ///
    /// Matching fills the caches lazily; precomputing is only useful before
    /// sharing the palette with several threads.
    pub fn precompute(&self) {
        for entry in &self.entries {
            entry.precompute();
        }
    }

    /// Find the entry nearest to `rgb` in the given color space.
    ///
    /// Linear scan in insertion order; only a strictly smaller distance
    /// replaces the current best, so the first of several equidistant entries
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if the palette has no entries.
    pub fn nearest(&self, space: ColorSpace, rgb: Rgb) -> Result<&PaletteEntry, MatchError> {
        let mut best: Option<&PaletteEntry> = None;
        let mut best_dist = f64::INFINITY;

        for entry in &self.entries {
            let dist = entry.distance_to(space, rgb);
            if dist < best_dist {
                best_dist = dist;
                best = Some(entry);
            }
        }

        best.ok_or(MatchError::EmptyPalette)
    }

    /// Like [`nearest()`](Self::nearest), with the color space given as a
    /// case-insensitive tag (`rgb`, `yuv`, `hsv`).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownColorSpace`] for an unrecognized tag, and
    /// [`MatchError::EmptyPalette`] if the palette has no entries.
    pub fn nearest_by_tag(&self, tag: &str, rgb: Rgb) -> Result<&PaletteEntry, MatchError> {
        let space: ColorSpace = tag.parse()?;
        self.nearest(space, rgb)
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
