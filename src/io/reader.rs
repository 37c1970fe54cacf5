//! Raster input: open a file and decode it into an in-memory image.
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::error::Result;

/// Decode the image at `path`. The container format is sniffed from the
/// file content, not the extension.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    info!(
        "Decoded {:?}: {}x{}, color {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
