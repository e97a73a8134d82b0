//! Raw-to-raw filter module
//!
//! Filters consume and produce raw-format images, so passes can be chained
//! through files the same way the fixture consumer does.

mod gaussian;
mod kernel;
mod sobel;


pub use gaussian::{gaussian_3x3, gaussian_5x5};
pub use sobel::{EdgeDirection, sobel};

use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::{BufferedRawReader, BufferedRawWriter, RawImage, RawReader, RawWriter};

/// A single filter pass over a raw image.
#[derive(Debug, Clone, Copy)]
pub enum FilterOp {
    Gaussian3x3,
    Gaussian5x5,
    Sobel { low: u8, high: u8 },
}

pub fn apply(image: &RawImage, op: FilterOp) -> RawImage {
    match op {
        FilterOp::Gaussian3x3 => gaussian_3x3(image),
        FilterOp::Gaussian5x5 => gaussian_5x5(image),
        FilterOp::Sobel { low, high } => sobel(image, low, high),
    }
}

/// Reads a raw file, applies one filter pass, and writes the result as a
/// raw file.
#[instrument(skip(input_path, output_path))]
pub fn apply_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    op: FilterOp,
) -> Result<()> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        ?op,
        "Filtering file"
    );

    let input_data = std::fs::read(input_path).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
    })?;

    let image = {
        let _span = tracing::info_span!("decode_raw").entered();
        BufferedRawReader.read_raw(&input_data)?
    };

    let filtered = {
        let _span = tracing::info_span!("apply_filter").entered();
        apply(&image, op)
    };

    let mut output_file = std::fs::File::create(output_path).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
    })?;

    {
        let _span = tracing::info_span!("encode_raw").entered();
        BufferedRawWriter.write_raw(&filtered, &mut output_file)?;
    }

    info!(
        width = filtered.width,
        height = filtered.height,
        "Filter pass complete"
    );
    Ok(())
}
