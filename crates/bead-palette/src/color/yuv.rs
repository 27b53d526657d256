//! YUV (luma/chroma) color type

use super::rgb::Rgb;

/// A color in analog YUV space (BT.601 luma weights).
///
/// `y` is luma on the same 0..=255 scale as the source bytes; `u` and `v` are
/// the scaled blue and red color differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    /// Luma
    pub y: f64,
    /// Blue-difference chroma
    pub u: f64,
    /// Red-difference chroma
    pub v: f64,
}

impl Yuv {
    #[inline]
    pub fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// Euclidean distance in YUV space.
    #[inline]
    pub fn distance(self, other: Yuv) -> f64 {
        let dy = self.y - other.y;
        let du = self.u - other.u;
        let dv = self.v - other.v;
        (dy * dy + du * du + dv * dv).sqrt()
    }
}

impl From<Rgb> for Yuv {
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        Self {
            y,
            u: 0.492 * (b - y),
            v: 0.877 * (r - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greys_have_no_chroma() {
        for v in [0u8, 17, 128, 200, 255] {
            let yuv = Yuv::from(Rgb::new(v, v, v));
            assert!((yuv.y - f64::from(v)).abs() < 1e-9);
            assert!(yuv.u.abs() < 1e-9, "grey {v} has u={}", yuv.u);
            assert!(yuv.v.abs() < 1e-9, "grey {v} has v={}", yuv.v);
        }
    }

    #[test]
    fn test_known_primaries() {
        let red = Yuv::from(Rgb::new(255, 0, 0));
        assert!((red.y - 76.245).abs() < 1e-9);
        assert!((red.u - 0.492 * -76.245).abs() < 1e-9);
        assert!((red.v - 0.877 * (255.0 - 76.245)).abs() < 1e-9);

        let blue = Yuv::from(Rgb::new(0, 0, 255));
        assert!((blue.y - 29.07).abs() < 1e-9);
        assert!(blue.u > 0.0, "blue should have positive u");
        assert!(blue.v < 0.0, "blue should have negative v");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Yuv::from(Rgb::new(10, 200, 30));
        let b = Yuv::from(Rgb::new(250, 5, 90));
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0.0);
    }
}
