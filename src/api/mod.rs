//! High-level, ergonomic library API: autocrop raster files to disk or to
//! in-memory buffers, and save helpers for the shared result. Prefer these
//! entrypoints over the low-level processing modules when embedding
//! AUTOCROP.
use std::path::{Path, PathBuf};

use crate::core::params::CropParams;
use crate::core::processing::crop::autocrop_rgba;
use crate::core::processing::save::save_cropped_image;
use crate::error::{Error, Result};
use crate::io::reader::read_image;
use crate::types::{BoundingBox, OutputFormat};

/// Result of in-memory autocropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub format: OutputFormat,
    /// Box of non-transparent content; `None` for a fully transparent source
    pub bbox: Option<BoundingBox>,
    /// Interleaved RGBA8, row-major
    pub rgba: Vec<u8>,
}

impl CroppedImage {
    /// True when trimming changed the image extent.
    pub fn was_cropped(&self) -> bool {
        self.width != self.source_width || self.height != self.source_height
    }
}

/// Decode `input`, trim its transparent border, and return the result as an
/// in-memory RGBA8 buffer (no disk I/O on the output side).
///
/// Sources without an alpha channel are converted to RGBA with every pixel
/// fully opaque, so their bounding box spans the full extent and nothing is
/// trimmed.
pub fn autocrop_to_buffer(input: &Path, params: &CropParams) -> Result<CroppedImage> {
    let decoded = read_image(input)?;
    let (source_width, source_height) = (decoded.width(), decoded.height());

    let rgba = decoded.into_rgba8();
    let (cropped, bbox) = autocrop_rgba(rgba);

    Ok(CroppedImage {
        width: cropped.width(),
        height: cropped.height(),
        source_width,
        source_height,
        format: params.format,
        bbox,
        rgba: cropped.into_raw(),
    })
}

/// Encode an in-memory crop result to `output`, overwriting any existing
/// file at that location.
pub fn save_cropped(image: &CroppedImage, output: &Path) -> Result<()> {
    save_cropped_image(&image.rgba, image.width, image.height, output, image.format)
        .map_err(|e| Error::external(e))
}

/// Decode `input`, trim its transparent border, and write the result to
/// `output`. On success a file exists at `output` containing the cropped
/// (or original, if nothing to crop) image with alpha preserved.
pub fn autocrop_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<()> {
    let cropped = autocrop_to_buffer(input, params)?;
    save_cropped(&cropped, output)
}

/// Decode and crop `input` once, then write the result to every path in
/// `outputs` independently. Returns the shared in-memory result so callers
/// can report on it.
pub fn autocrop_to_paths(
    input: &Path,
    outputs: &[PathBuf],
    params: &CropParams,
) -> Result<CroppedImage> {
    if outputs.is_empty() {
        return Err(Error::Processing("no output paths given".to_string()));
    }

    let cropped = autocrop_to_buffer(input, params)?;
    for output in outputs {
        save_cropped(&cropped, output)?;
    }
    Ok(cropped)
}
