//! Distance metrics between two RGB colors.
//!
//! Three color spaces are available through [`ColorSpace`]:
//!
//! | Tag   | Metric |
//! |-------|--------|
//! | `rgb` | Red-weighted Euclidean distance on raw channels |
//! | `yuv` | Euclidean distance in [`Yuv`] |
//! | `hsv` | Cylindrical distance in [`Hsv`] |
//!
//! All metrics are pure and total over `[0,255]^3`. The first argument is the
//! palette color and the second the query color; only the legacy RGB weighting
//! distinguishes the two.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsv, Rgb, Yuv};
use crate::palette::MatchError;

/// How the red mean is computed for the RGB metric's channel weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedMean {
    /// `a.r + b.r / 2`.
    ///
    /// Matches the weighting of existing bead patterns; note that it is not a
    /// true mean and makes the RGB metric asymmetric.
    #[default]
    Legacy,
    /// `(a.r + b.r) / 2`, the conventional "redmean" weighting.
    Average,
}

impl RedMean {
    #[inline]
    fn of(self, a: u8, b: u8) -> f64 {
        let (a, b) = (f64::from(a), f64::from(b));
        match self {
            RedMean::Legacy => a + b / 2.0,
            RedMean::Average => (a + b) / 2.0,
        }
    }
}

impl fmt::Display for RedMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedMean::Legacy => f.write_str("legacy"),
            RedMean::Average => f.write_str("average"),
        }
    }
}

impl FromStr for RedMean {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(RedMean::Legacy),
            "average" => Ok(RedMean::Average),
            other => Err(format!(
                "unknown red mean mode '{other}' (expected legacy or average)"
            )),
        }
    }
}

/// Color space in which palette distances are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Weighted Euclidean distance on RGB channels.
    ///
    /// Formula: `sqrt((2 + rmean/256)·dr² + 4·dg² + (2 + (255 - rmean)/256)·db²)`
    Rgb {
        /// Red mean computation for the channel weights.
        red_mean: RedMean,
    },
    /// Euclidean distance in YUV.
    Yuv,
    /// Cylindrical hue/saturation/value distance.
    Hsv,
}

impl Default for ColorSpace {
    fn default() -> Self {
        ColorSpace::Rgb {
            red_mean: RedMean::default(),
        }
    }
}

impl ColorSpace {
    /// Replace the red mean mode. Has no effect on YUV and HSV.
    pub fn with_red_mean(self, red_mean: RedMean) -> Self {
        match self {
            ColorSpace::Rgb { .. } => ColorSpace::Rgb { red_mean },
            other => other,
        }
    }

    /// Distance from palette color `a` to query color `b`.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_palette::{ColorSpace, Rgb};
    ///
    /// let space: ColorSpace = "YUV".parse().unwrap();
    /// let d = space.distance(Rgb::BLACK, Rgb::WHITE);
    /// assert!((d - 255.0).abs() < 1e-9);
    /// ```
    pub fn distance(self, a: Rgb, b: Rgb) -> f64 {
        match self {
            ColorSpace::Rgb { red_mean } => distance_rgb(a, b, red_mean),
            ColorSpace::Yuv => Yuv::from(a).distance(Yuv::from(b)),
            ColorSpace::Hsv => Hsv::from(a).distance(Hsv::from(b)),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Rgb { .. } => f.write_str("rgb"),
            ColorSpace::Yuv => f.write_str("yuv"),
            ColorSpace::Hsv => f.write_str("hsv"),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = MatchError;

    /// Parse a case-insensitive tag: `rgb`, `yuv` or `hsv`.
    ///
    /// `rgb` selects [`RedMean::Legacy`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rgb") {
            Ok(ColorSpace::default())
        } else if s.eq_ignore_ascii_case("yuv") {
            Ok(ColorSpace::Yuv)
        } else if s.eq_ignore_ascii_case("hsv") {
            Ok(ColorSpace::Hsv)
        } else {
            Err(MatchError::UnknownColorSpace(s.to_string()))
        }
    }
}

/// Red-weighted Euclidean distance from palette color `a` to query color `b`.
pub fn distance_rgb(a: Rgb, b: Rgb, red_mean: RedMean) -> f64 {
    let rmean = red_mean.of(a.r, b.r);
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);

    let wr = 2.0 + rmean / 256.0;
    let wg = 4.0;
    let wb = 2.0 + (255.0 - rmean) / 256.0;
    (wr * dr * dr + wg * dg * dg + wb * db * db).sqrt()
}

/// Distance between two colors in the color space named by `tag`.
///
/// # Errors
///
/// Returns [`MatchError::UnknownColorSpace`] when `tag` is not one of
/// `rgb`, `yuv`, `hsv` (case-insensitive).
///
/// # Example
///
/// ```
/// use bead_palette::{metric, Rgb};
///
/// assert_eq!(metric::distance("hsv", Rgb::BLACK, Rgb::WHITE).unwrap(), 1.0);
/// assert!(metric::distance("XYZ", Rgb::BLACK, Rgb::WHITE).is_err());
/// ```
pub fn distance(tag: &str, a: Rgb, b: Rgb) -> Result<f64, MatchError> {
    let space: ColorSpace = tag.parse()?;
    Ok(space.distance(a, b))
}

/// Label color giving contrast against a cell fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// The concrete label color.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb::BLACK,
            TextColor::White => Rgb::WHITE,
        }
    }
}

/// Channel-sum threshold above which a fill counts as light (128 per channel).
const LIGHT_FILL_THRESHOLD: u16 = 128 * 3;

/// Pick the label color for text drawn on `fill`.
///
/// Black on fills whose channel sum exceeds 384, white otherwise.
pub fn text_color_for(fill: Rgb) -> TextColor {
    if fill.channel_sum() > LIGHT_FILL_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}
