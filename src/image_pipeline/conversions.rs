//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning a compressed source
//! image into a raw fixture file.

mod source_to_raw;
mod types;

#[cfg(test)]
mod tests;

pub use source_to_raw::SourceToRawPipeline;
pub use types::{EncodeConfig, EncodeConfigBuilder, ResizeFilter};
