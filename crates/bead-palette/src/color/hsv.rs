//! HSV color type with hue in degrees

use super::rgb::Rgb;

/// A color in HSV space.
///
/// Hue is in degrees `[0, 360)`; saturation and value are in `[0, 1]`.
/// Greys (including black and white) have hue 0 and saturation 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Value, 0.0..=1.0
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Cylindrical distance.
    ///
    /// The hue difference wraps around the circle and is normalized by 180
    /// degrees, so opposite hues contribute 1.0 and identical hues 0.0.
    /// Saturation and value differences contribute linearly.
    ///
    /// ```
    /// use bead_palette::Hsv;
    ///
    /// let a = Hsv::new(350.0, 1.0, 1.0);
    /// let b = Hsv::new(10.0, 1.0, 1.0);
    /// assert!((a.distance(b) - 20.0 / 180.0).abs() < 1e-12);
    /// ```
    pub fn distance(self, other: Hsv) -> f64 {
        let raw = (other.h - self.h).abs();
        let dh = raw.min(360.0 - raw) / 180.0;
        let ds = (other.s - self.s).abs();
        let dv = (other.v - self.v).abs();
        (dh * dh + ds * ds + dv * dv).sqrt()
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return Self::new(0.0, 0.0, max);
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        // Sector offset depends on which channel holds the maximum; red wins ties.
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let h = (sector / 6.0).rem_euclid(1.0) * 360.0;

        Self::new(h, s, max)
    }
}
