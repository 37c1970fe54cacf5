use tracing::info;

use autocrop::CropParams;
use autocrop::api::{autocrop_to_buffer, save_cropped};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Decode and crop once; each output is an independent encode of the
    // same result.
    let cropped = autocrop_to_buffer(&args.input, &CropParams::default())?;

    match cropped.bbox {
        Some(bbox) if cropped.was_cropped() => info!(
            "Trimmed {}x{} -> {}x{} (content box {})",
            cropped.source_width, cropped.source_height, cropped.width, cropped.height, bbox
        ),
        Some(_) => info!(
            "Nothing to trim: content spans the full {}x{} extent",
            cropped.width, cropped.height
        ),
        None => info!(
            "Fully transparent image: kept at {}x{}",
            cropped.width, cropped.height
        ),
    }

    for output in [&args.logo, &args.favicon] {
        save_cropped(&cropped, output)?;
        println!("Autocropped and saved to {}", output.display());
    }

    Ok(())
}
