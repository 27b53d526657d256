//! Beadify - turn pixel art into labelled craft-bead patterns.
//!
//! Each opaque pixel of a source PNG is matched to the nearest color of a
//! bead palette and drawn as a labelled, outlined cell of the output PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
