//! Gaussian blur over the raw format.
//!
//! The blur works on grayscale intensity and writes the result back as a
//! raw image with the value replicated across all three channels.

use crate::image_pipeline::filters::kernel::convolve;
use crate::image_pipeline::raw::{RawImage, Rgb};

const KERNEL_3X3: [[i32; 3]; 3] = [
    [1, 2, 1],
    [2, 4, 2],
    [1, 2, 1],
];
const DIVISOR_3X3: i32 = 16;

const KERNEL_5X5: [[i32; 5]; 5] = [
    [1, 4, 7, 4, 1],
    [4, 16, 26, 16, 4],
    [7, 26, 41, 26, 7],
    [4, 16, 26, 16, 4],
    [1, 4, 7, 4, 1],
];
const DIVISOR_5X5: i32 = 273;

fn blur<const N: usize>(image: &RawImage, kernel: &[[i32; N]; N], divisor: i32) -> RawImage {
    RawImage::from_fn(image.width, image.height, |x, y| {
        let value = convolve(image, x, y, kernel, divisor).clamp(0, 255) as u8;
        Rgb::new(value, value, value)
    })
}

pub fn gaussian_3x3(image: &RawImage) -> RawImage {
    blur(image, &KERNEL_3X3, DIVISOR_3X3)
}

pub fn gaussian_5x5(image: &RawImage) -> RawImage {
    blur(image, &KERNEL_5X5, DIVISOR_5X5)
}
