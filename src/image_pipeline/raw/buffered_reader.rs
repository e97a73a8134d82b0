//! Raw format decoder.
//!
//! Parses the fixed 8-byte header (little-endian u32 width, then height)
//! and the row-major RGB pixel region that follows. The pixel region is
//! taken in one bulk copy rather than per-byte reads.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::reader::RawReader;
use crate::image_pipeline::raw::types::{HEADER_LEN, RawImage, pixel_region_len};

pub struct BufferedRawReader;

impl RawReader for BufferedRawReader {
    /// Decodes a raw image from a byte slice.
    ///
    /// Zero-dimension headers are valid and decode to an empty image. A
    /// stream that ends before width * height * 3 pixel bytes are available
    /// is rejected as truncated; trailing bytes beyond the pixel region are
    /// ignored.
    fn read_raw(&self, data: &[u8]) -> Result<RawImage> {
        if data.len() < HEADER_LEN {
            return Err(ConversionError::DecodeError(format!(
                "raw header requires {HEADER_LEN} bytes, found {}",
                data.len()
            )));
        }

        let width = u32::from_le_bytes(data[0..4].try_into().unwrap());
        let height = u32::from_le_bytes(data[4..8].try_into().unwrap());

        debug!("Raw header: {}x{}", width, height);

        let expected = pixel_region_len(width, height);
        let body = &data[HEADER_LEN..];
        if body.len() < expected {
            return Err(ConversionError::TruncatedInput {
                expected,
                actual: body.len(),
            });
        }

        RawImage::new(width, height, body[..expected].to_vec())
    }
}
