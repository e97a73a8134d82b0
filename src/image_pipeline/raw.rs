//! Raw image format module
//!
//! The raw format is an uncompressed dump: a 4-byte little-endian width,
//! a 4-byte little-endian height, then width * height RGB triples in
//! row-major order, one byte per channel. No palette, no padding, no alpha.

mod buffered_reader;
mod buffered_writer;
mod reader;
pub mod types;
mod writer;


pub use buffered_reader::BufferedRawReader;
pub use buffered_writer::BufferedRawWriter;
pub use reader::RawReader;
pub use types::{CHANNELS, HEADER_LEN, RawImage, Rgb};
pub use writer::RawWriter;
