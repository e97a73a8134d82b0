//! Source image reading module
//!
//! Decoding the compressed source image (JPEG in the reference use) is
//! delegated to the `image` crate behind the [`SourceImageReader`] seam.

mod image_crate_reader;
mod reader;

pub use image_crate_reader::ImageCrateReader;
pub use reader::SourceImageReader;
