//! Platform image viewer.
//!
//! The reconstructed image is written as a PNG to a kept temporary file and
//! handed to the platform opener (xdg-open, open, or cmd start). The viewer
//! process is not waited on; the temporary file stays behind for it.

use std::path::Path;
use std::process::Command;

use image::RgbImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::preview::viewer::ImageViewer;

pub struct SystemViewer;

fn viewer_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    cmd
}

impl ImageViewer for SystemViewer {
    fn show(&self, image: &RgbImage) -> Result<()> {
        let file = tempfile::Builder::new()
            .prefix("rawpix-preview-")
            .suffix(".png")
            .tempfile()?;
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| ConversionError::PreviewError(e.to_string()))?;

        image
            .save(&path)
            .map_err(|e| ConversionError::PreviewError(e.to_string()))?;

        debug!("Preview written to {}", path.display());

        viewer_command(&path)
            .spawn()
            .map_err(|e| ConversionError::PreviewError(format!("viewer launch failed: {e}")))?;

        Ok(())
    }
}
