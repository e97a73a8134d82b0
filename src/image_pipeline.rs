//! Image pipeline module
//!
//! This module provides a structured approach to raw fixture generation,
//! with separate modules for source decoding, the raw format codec,
//! conversion orchestration, previewing, and raw-to-raw filters.

pub mod common;
pub mod conversions;
pub mod filters;
pub mod preview;
pub mod raw;
pub mod source;

pub use common::{ConversionError, Result};

pub use raw::{BufferedRawReader, BufferedRawWriter, RawImage, RawReader, RawWriter, Rgb};

pub use source::{ImageCrateReader, SourceImageReader};

pub use conversions::{EncodeConfig, EncodeConfigBuilder, ResizeFilter, SourceToRawPipeline};

pub use preview::{ImageViewer, PreviewPipeline, SystemViewer};

pub use filters::FilterOp;
