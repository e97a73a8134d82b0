use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::SourceToRawPipeline;
use crate::image_pipeline::conversions::types::{EncodeConfig, ResizeFilter};
use crate::image_pipeline::raw::{RawImage, RawWriter, Rgb};
use crate::image_pipeline::source::SourceImageReader;

struct MockReader {
    should_fail: bool,
    mock_image: Option<DynamicImage>,
}

impl SourceImageReader for MockReader {
    fn read_source(&self, _data: &[u8]) -> Result<DynamicImage> {
        if self.should_fail {
            return Err(ConversionError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self
            .mock_image
            .clone()
            .unwrap_or_else(|| DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, image::Rgb([7, 8, 9])))))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<RawImage>>>,
}

impl RawWriter for MockWriter {
    fn write_raw(&self, image: &RawImage, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::OutputWriteError("Mock write error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

#[test]
fn test_config_builder() {
    let config = EncodeConfig::builder()
        .target_width(128)
        .target_height(64)
        .filter(ResizeFilter::Nearest)
        .build();

    assert_eq!(config.target_width, 128);
    assert_eq!(config.target_height, 64);
    assert_eq!(config.filter, ResizeFilter::Nearest);
}

#[test]
fn test_config_defaults_to_reference_resolution() {
    let config = EncodeConfig::default();
    assert_eq!(config.target_width, 300);
    assert_eq!(config.target_height, 300);
}

#[test]
fn test_successful_conversion_resizes_to_target() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_image: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let config = EncodeConfig::builder()
        .target_width(4)
        .target_height(2)
        .filter(ResizeFilter::Nearest)
        .build();
    let pipeline = SourceToRawPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake jpeg data", &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].width, 4);
    assert_eq!(written[0].height, 2);
    assert_eq!(written[0].pixel(0, 0), Rgb::new(7, 8, 9));
}

#[test]
fn test_alpha_channel_is_discarded() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 6, image::Rgba([10, 20, 30, 128])));
    let reader = MockReader { should_fail: false, mock_image: Some(source) };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let config = EncodeConfig::builder()
        .target_width(3)
        .target_height(3)
        .filter(ResizeFilter::Nearest)
        .build();
    let pipeline = SourceToRawPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    pipeline.convert(b"fake png data", &mut output).unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written[0].pixel(1, 1), Rgb::new(10, 20, 30));
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: true, mock_image: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = SourceToRawPipeline::with_custom(reader, writer, EncodeConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake jpeg data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_image: None };
    let writer = MockWriter { should_fail: true, written_data: written };

    let pipeline = SourceToRawPipeline::with_custom(reader, writer, EncodeConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake jpeg data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::OutputWriteError(_)));
}

#[test]
fn test_missing_input_file() {
    let pipeline = SourceToRawPipeline::new(EncodeConfig::default());
    let result = pipeline.convert_file("/no/such/source.jpg", "/tmp/rawpix-test-unwritten.raw");

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::InputReadError(_)));
}
