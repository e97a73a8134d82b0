use image::RgbImage;

use crate::image_pipeline::common::error::Result;

pub trait ImageViewer {
    fn show(&self, image: &RgbImage) -> Result<()>;
}
