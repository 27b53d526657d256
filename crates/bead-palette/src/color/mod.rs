//! Color types and conversions
//!
//! - [`Rgb`]: 8-bit input color, the type palettes and pixels are stored as
//! - [`Yuv`]: luma/chroma representation used by the YUV metric
//! - [`Hsv`]: hue/saturation/value representation used by the HSV metric
//!
//! # Example
//!
//! ```
//! use bead_palette::{Hsv, Rgb, Yuv};
//!
//! let orange = Rgb::new(255, 165, 0);
//! let yuv = Yuv::from(orange);
//! let hsv = Hsv::from(orange);
//! assert!(yuv.y > 0.0);
//! assert!(hsv.h > 30.0 && hsv.h < 45.0);
//! ```

mod hsv;
mod rgb;
mod yuv;

pub use hsv::Hsv;
pub use rgb::Rgb;
pub use yuv::Yuv;
