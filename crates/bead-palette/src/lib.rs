#![allow(clippy::module_inception)]

//! bead-palette: nearest-color matching against named bead palettes
//!
//! This library maps arbitrary RGB colors onto a small, named palette such as
//! the color range of a craft-bead manufacturer. It is the matching core of
//! `beadify`, but has no knowledge of images or rendering.
//!
//! # Quick Start
//!
//! ```
//! use bead_palette::{ColorSpace, Palette, Rgb};
//!
//! let palette = Palette::from_config_str("\
//! [Palette]
//! black = 0,0,0
//! white = 255,255,255
//! red   = 200,30,40   # cherry
//! ").unwrap();
//!
//! let space: ColorSpace = "hsv".parse().unwrap();
//! let bead = palette.nearest(space, Rgb::new(220, 20, 20)).unwrap();
//! assert_eq!(bead.name(), "red");
//! ```
//!
//! # Color Spaces
//!
//! Distances are measured in one of three spaces, selected by a
//! case-insensitive tag (see [`ColorSpace`]):
//!
//! | Tag   | Distance | Character |
//! |-------|----------|-----------|
//! | `rgb` | `sqrt(wr·dr² + 4·dg² + wb·db²)` | Cheap; red-dependent weights approximate perception |
//! | `yuv` | Euclidean in Y/U/V | Separates luma from chroma; good for shading |
//! | `hsv` | Cylindrical, hue wraps at 360° | Keeps hue families together |
//!
//! ## RGB weighting
//!
//! The red and blue weights depend on a red mean:
//!
//! ```text
//! wr = 2 + rmean / 256
//! wb = 2 + (255 - rmean) / 256
//! ```
//!
//! Two definitions of `rmean` exist (see [`RedMean`]). `Legacy` computes
//! `a.r + b.r / 2`, which is what existing patterns were generated with, and
//! is the default. `Average` computes the conventional `(a.r + b.r) / 2`.
//!
//! ## HSV distance
//!
//! ```text
//! dh = min(|h2 - h1|, 360 - |h2 - h1|) / 180
//! d  = sqrt(dh² + ds² + dv²)
//! ```
//!
//! # Matching
//!
//! [`Palette::nearest()`] scans entries linearly in insertion order and keeps
//! the first entry with the smallest distance. Each [`PaletteEntry`]
//! memoizes its own YUV and HSV coordinates the first time they are needed.

pub mod color;
pub mod metric;
pub mod palette;


pub use color::{Hsv, Rgb, Yuv};
pub use metric::{text_color_for, ColorSpace, RedMean, TextColor};
pub use palette::{MatchError, Palette, PaletteEntry, PaletteError, ParseColorError};
