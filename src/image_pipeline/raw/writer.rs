use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImage;

pub trait RawWriter {
    fn write_raw(&self, image: &RawImage, output: &mut dyn Write) -> Result<()>;
}
