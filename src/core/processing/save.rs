use std::path::Path;
use tracing::info;

use crate::io::writers::png::write_rgba_png;
use crate::types::OutputFormat;

pub fn save_cropped_image(
    rgba: &[u8],
    cols: u32,
    rows: u32,
    output: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Png => {
            write_rgba_png(output, cols, rows, rgba)?;
            info!("save_cropped_image: RGBA PNG saved");
        }
    }
    Ok(())
}
