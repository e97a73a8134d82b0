//! Sobel edge detection over the raw format.
//!
//! Each output pixel packs the edge magnitude into the red and blue
//! channels and a quantized gradient direction into the green channel.
//! A double threshold suppresses weak responses: magnitudes below the low
//! threshold are dropped, magnitudes between the thresholds survive only
//! when an 8-connected neighbor responds above the high threshold.

use crate::image_pipeline::filters::kernel::convolve;
use crate::image_pipeline::raw::{RawImage, Rgb};

const GX_KERNEL: [[i32; 3]; 3] = [
    [1, 0, -1],
    [2, 0, -2],
    [1, 0, -1],
];

const GY_KERNEL: [[i32; 3]; 3] = [
    [1, 2, 1],
    [0, 0, 0],
    [-1, -2, -1],
];

const GRADIENT_DIVISOR: i32 = 4;

/// Gradient orientation quantized to four sectors, encoded in the green
/// channel of the output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Horizontal,
    NorthEast,
    Vertical,
    NorthWest,
}

impl EdgeDirection {
    /// Quantizes atan2(gy, gx) into one of the four direction sectors.
    /// Negative angles are folded into [0, 180).
    pub fn from_gradients(gy: i32, gx: i32) -> Self {
        let mut degrees = (gy as f64).atan2(gx as f64).to_degrees();
        if degrees < 0.0 {
            degrees = 180.0 - degrees.abs();
        }

        if degrees < 22.5 {
            EdgeDirection::Horizontal
        } else if degrees < 67.5 {
            EdgeDirection::NorthEast
        } else if degrees < 112.5 {
            EdgeDirection::Vertical
        } else if degrees < 157.5 {
            EdgeDirection::NorthWest
        } else {
            EdgeDirection::Horizontal
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            EdgeDirection::Horizontal => 0x00,
            EdgeDirection::NorthEast => 0x40,
            EdgeDirection::Vertical => 0x80,
            EdgeDirection::NorthWest => 0xC0,
        }
    }
}

fn gradient_x(image: &RawImage, x: u32, y: u32) -> i32 {
    convolve(image, x, y, &GX_KERNEL, GRADIENT_DIVISOR)
}

fn gradient_y(image: &RawImage, x: u32, y: u32) -> i32 {
    convolve(image, x, y, &GY_KERNEL, GRADIENT_DIVISOR)
}

fn magnitude(gx: i32, gy: i32) -> u8 {
    ((gx.abs() + gy.abs()) / 2) as u8
}

fn connected_to_strong_edge(image: &RawImage, x: u32, y: u32, high: u8) -> bool {
    for j in -1i64..=1 {
        for i in -1i64..=1 {
            let nx = x as i64 + i;
            let ny = y as i64 + j;
            if nx < 0 || ny < 0 || nx >= image.width as i64 || ny >= image.height as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if magnitude(gradient_x(image, nx, ny), gradient_y(image, nx, ny)) > high {
                return true;
            }
        }
    }
    false
}

pub fn sobel(image: &RawImage, low: u8, high: u8) -> RawImage {
    RawImage::from_fn(image.width, image.height, |x, y| {
        let gx = gradient_x(image, x, y);
        let gy = gradient_y(image, x, y);
        let mut mag = magnitude(gx, gy);
        let mut direction = EdgeDirection::from_gradients(gy, gx);

        if mag < low {
            mag = 0;
            direction = EdgeDirection::Horizontal;
        } else if mag < high && !connected_to_strong_edge(image, x, y, high) {
            mag = 0;
            direction = EdgeDirection::Horizontal;
        }

        Rgb::new(mag, direction.as_byte(), mag)
    })
}
