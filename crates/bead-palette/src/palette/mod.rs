//! Palette types and utilities
//!
//! This module provides the named-color [`Palette`], its [`PaletteEntry`]
//! values, palette file parsing, and the error types for parsing and matching.

mod config;
mod entry;
mod error;
mod palette;

pub use config::PALETTE_SECTION;
pub use entry::PaletteEntry;
pub use error::{MatchError, PaletteError, ParseColorError};
pub use palette::Palette;
