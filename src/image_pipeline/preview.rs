//! Raw file preview module
//!
//! Reads a raw-format file back into an in-memory RGB image and opens it
//! in the platform image viewer.

mod pipeline;
mod system_viewer;
mod viewer;

#[cfg(test)]
mod tests;

pub use pipeline::PreviewPipeline;
pub use system_viewer::SystemViewer;
pub use viewer::ImageViewer;
