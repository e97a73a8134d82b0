use crate::image_pipeline::raw::RawImage;

/// Grayscale intensity at (x, y). Coordinates outside the image read as 0,
/// which zero-pads every kernel at the border.
pub(super) fn sample(image: &RawImage, x: i64, y: i64) -> u8 {
    if x < 0 || y < 0 || x >= image.width as i64 || y >= image.height as i64 {
        return 0;
    }
    image.pixel(x as u32, y as u32).intensity()
}

/// Applies an NxN kernel centered on (x, y) over the grayscale intensity of
/// the image and divides the accumulated total by `divisor`.
pub(super) fn convolve<const N: usize>(
    image: &RawImage,
    x: u32,
    y: u32,
    kernel: &[[i32; N]; N],
    divisor: i32,
) -> i32 {
    let radius = (N / 2) as i64;
    let mut total = 0i32;
    for (j, row) in kernel.iter().enumerate() {
        for (i, &k) in row.iter().enumerate() {
            let sx = x as i64 + i as i64 - radius;
            let sy = y as i64 + j as i64 - radius;
            total += k * sample(image, sx, sy) as i32;
        }
    }
    total / divisor
}
