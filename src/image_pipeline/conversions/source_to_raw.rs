use std::io::Write;
use std::path::Path;

use image::imageops::FilterType;
use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::types::{EncodeConfig, ResizeFilter},
    raw::{BufferedRawWriter, RawImage, RawWriter},
    source::{ImageCrateReader, SourceImageReader},
};

pub struct SourceToRawPipeline<R: SourceImageReader, W: RawWriter> {
    reader: R,
    writer: W,
    config: EncodeConfig,
}

impl SourceToRawPipeline<ImageCrateReader, BufferedRawWriter> {
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: BufferedRawWriter,
            config,
        }
    }
}

impl<R: SourceImageReader, W: RawWriter> SourceToRawPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: EncodeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn filter_type(&self) -> FilterType {
        match self.config.filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting source to raw conversion");

        let source = {
            let _span = tracing::info_span!("decode_source").entered();
            self.reader.read_source(input_data)?
        };

        let resized = {
            let _span = tracing::info_span!(
                "resize",
                target_width = self.config.target_width,
                target_height = self.config.target_height
            )
            .entered();
            source.resize_exact(
                self.config.target_width,
                self.config.target_height,
                self.filter_type(),
            )
        };

        // to_rgb8 drops any alpha channel the source carried.
        let rgb = resized.to_rgb8();
        let raw_image = RawImage::new(rgb.width(), rgb.height(), rgb.into_raw())?;

        {
            let _span = tracing::info_span!("encode_raw").entered();
            self.writer.write_raw(&raw_image, output)?;
        }

        info!(
            width = raw_image.width,
            height = raw_image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncodeConfig) {
        self.config = config;
    }
}
