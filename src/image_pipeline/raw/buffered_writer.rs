use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImage;
use crate::image_pipeline::raw::writer::RawWriter;

/// Raw format encoder that assembles the whole file in memory and writes
/// it with a single call, instead of one write per channel byte.
pub struct BufferedRawWriter;

impl RawWriter for BufferedRawWriter {
    fn write_raw(&self, image: &RawImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding raw image: {}x{}", image.width, image.height);

        let mut buffer = Vec::with_capacity(image.encoded_len());
        buffer.extend_from_slice(&image.width.to_le_bytes());
        buffer.extend_from_slice(&image.height.to_le_bytes());
        buffer.extend_from_slice(&image.pixels);

        output.write_all(&buffer)?;

        debug!("Raw encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
