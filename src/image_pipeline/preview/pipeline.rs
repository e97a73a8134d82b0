use std::path::Path;

use image::RgbImage;
use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    preview::system_viewer::SystemViewer,
    preview::viewer::ImageViewer,
    raw::{BufferedRawReader, RawImage, RawReader},
};

pub struct PreviewPipeline<R: RawReader, V: ImageViewer> {
    reader: R,
    viewer: V,
}

impl PreviewPipeline<BufferedRawReader, SystemViewer> {
    pub fn new() -> Self {
        Self {
            reader: BufferedRawReader,
            viewer: SystemViewer,
        }
    }
}

impl Default for PreviewPipeline<BufferedRawReader, SystemViewer> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_rgb_image(raw: &RawImage) -> Result<RgbImage> {
    RgbImage::from_raw(raw.width, raw.height, raw.pixels.clone()).ok_or(
        ConversionError::BufferSizeMismatch {
            width: raw.width,
            height: raw.height,
            expected: raw.pixels.len(),
            actual: raw.pixels.len(),
        },
    )
}

impl<R: RawReader, V: ImageViewer> PreviewPipeline<R, V> {
    pub fn with_custom(reader: R, viewer: V) -> Self {
        Self { reader, viewer }
    }

    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn preview(&self, data: &[u8]) -> Result<()> {
        info!("Starting raw preview");

        let raw_image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(data)?
        };

        let rgb = to_rgb_image(&raw_image)?;

        {
            let _span = tracing::info_span!("show_image").entered();
            self.viewer.show(&rgb)?;
        }

        info!(
            width = raw_image.width,
            height = raw_image.height,
            "Preview complete"
        );
        Ok(())
    }

    #[instrument(skip(self, path))]
    pub fn preview_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        info!(input = %path.display(), "Previewing file");

        let data = std::fs::read(path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", path.display(), e))
        })?;

        self.preview(&data)
    }
}
