//! Raw image data types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Size of the raw file header: 4-byte width followed by 4-byte height,
/// both little-endian.
pub const HEADER_LEN: usize = 8;

/// Number of channels per pixel. The format carries no alpha.
pub const CHANNELS: usize = 3;

/// A single pixel with exactly three 8-bit channels. Any alpha channel on
/// the source image is discarded before one of these is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Average of the three channels, used as the grayscale intensity by
    /// the filter kernels.
    pub fn intensity(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

/// Decoded raw image: dimensions plus an interleaved RGB byte buffer in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Interleaved pixel data [R, G, B, R, G, B, ...], row-major
    pub pixels: Vec<u8>,
}

/// Byte length of the pixel region for the given dimensions.
pub fn pixel_region_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

impl RawImage {
    /// Builds a raw image, enforcing that the buffer length is exactly
    /// width * height * 3.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = pixel_region_len(width, height);
        if pixels.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image by evaluating `f` at every (x, y), row-major.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(pixel_region_len(width, height));
        for y in 0..height {
            for x in 0..width {
                let px = f(x, y);
                pixels.push(px.r);
                pixels.push(px.g);
                pixels.push(px.b);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = (self.width as usize * y as usize + x as usize) * CHANNELS;
        Rgb::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Total encoded file size for this image, header included.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.pixels.len()
    }
}
