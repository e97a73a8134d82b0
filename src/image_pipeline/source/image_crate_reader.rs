//! Source image reader backed by the `image` crate.
//!
//! Decoding of the compressed source is delegated entirely to the library;
//! format sniffing is done from the byte content, so JPEG, PNG and the
//! other formats the crate supports all work as encoder input.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::source::reader::SourceImageReader;

pub struct ImageCrateReader;

impl SourceImageReader for ImageCrateReader {
    fn read_source(&self, data: &[u8]) -> Result<DynamicImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!("Decoded source image: {}x{}", decoded.width(), decoded.height());
        Ok(decoded)
    }
}
