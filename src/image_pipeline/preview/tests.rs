use std::io::Write;
use std::sync::{Arc, Mutex};

use image::RgbImage;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::preview::viewer::ImageViewer;
use crate::image_pipeline::preview::PreviewPipeline;
use crate::image_pipeline::raw::{BufferedRawReader, BufferedRawWriter, RawImage, RawWriter, Rgb};

struct MockViewer {
    should_fail: bool,
    shown: Arc<Mutex<Vec<RgbImage>>>,
}

impl ImageViewer for MockViewer {
    fn show(&self, image: &RgbImage) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::PreviewError("Mock viewer error".to_string()));
        }
        self.shown.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn encode(image: &RawImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    BufferedRawWriter.write_raw(image, &mut buffer).unwrap();
    buffer
}

#[test]
fn test_preview_reconstructs_pixels() {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let viewer = MockViewer { should_fail: false, shown: shown.clone() };
    let pipeline = PreviewPipeline::with_custom(BufferedRawReader, viewer);

    let image = RawImage::new(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
    pipeline.preview(&encode(&image)).unwrap();

    let shown = shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].dimensions(), (2, 1));
    assert_eq!(shown[0].get_pixel(0, 0), &image::Rgb([255, 0, 0]));
    assert_eq!(shown[0].get_pixel(1, 0), &image::Rgb([0, 255, 0]));
}

#[test]
fn test_preview_rejects_truncated_input() {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let viewer = MockViewer { should_fail: false, shown: shown.clone() };
    let pipeline = PreviewPipeline::with_custom(BufferedRawReader, viewer);

    let image = RawImage::from_fn(3, 3, |_, _| Rgb::new(1, 2, 3));
    let mut bytes = encode(&image);
    bytes.truncate(bytes.len() - 4);

    let result = pipeline.preview(&bytes);
    assert!(matches!(result.unwrap_err(), ConversionError::TruncatedInput { .. }));
    assert!(shown.lock().unwrap().is_empty());
}

#[test]
fn test_viewer_failure_propagates() {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let viewer = MockViewer { should_fail: true, shown };
    let pipeline = PreviewPipeline::with_custom(BufferedRawReader, viewer);

    let image = RawImage::new(1, 1, vec![0, 0, 0]).unwrap();
    let result = pipeline.preview(&encode(&image));
    assert!(matches!(result.unwrap_err(), ConversionError::PreviewError(_)));
}

#[test]
fn test_preview_file_round_trip() {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let viewer = MockViewer { should_fail: false, shown: shown.clone() };
    let pipeline = PreviewPipeline::with_custom(BufferedRawReader, viewer);

    let image = RawImage::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 50));
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&encode(&image)).unwrap();

    pipeline.preview_file(file.path()).unwrap();

    let shown = shown.lock().unwrap();
    assert_eq!(shown[0].dimensions(), (4, 4));
    assert_eq!(shown[0].get_pixel(3, 2), &image::Rgb([3, 2, 50]));
}

#[test]
fn test_preview_missing_file() {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let viewer = MockViewer { should_fail: false, shown };
    let pipeline = PreviewPipeline::with_custom(BufferedRawReader, viewer);

    let result = pipeline.preview_file("/no/such/file.raw");
    assert!(matches!(result.unwrap_err(), ConversionError::InputReadError(_)));
}
