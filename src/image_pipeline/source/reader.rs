use image::DynamicImage;

use crate::image_pipeline::common::error::Result;

pub trait SourceImageReader {
    fn read_source(&self, data: &[u8]) -> Result<DynamicImage>;
}
