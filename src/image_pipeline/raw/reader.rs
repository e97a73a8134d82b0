use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImage;

pub trait RawReader {
    fn read_raw(&self, data: &[u8]) -> Result<RawImage>;
}
