pub mod config;
pub mod source_image;

pub use config::RenderConfig;
pub use source_image::SourceImage;
