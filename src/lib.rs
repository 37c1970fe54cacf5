#![doc = r#"
AUTOCROP — trim fully-transparent borders from raster images.

This crate decodes a raster image, computes the bounding box of its
non-transparent pixels, crops to that box, and writes the result as a
lossless RGBA PNG. It powers the `autocrop` CLI (one input, a logo copy and
a favicon copy) and can be embedded in your own Rust applications.

Quick start: crop a file to a path
----------------------------------
```rust,no_run
use std::path::Path;
use autocrop::{autocrop_to_path, CropParams};

fn main() -> autocrop::Result<()> {
    autocrop_to_path(
        Path::new("uploaded_logo.png"),
        Path::new("public/logo.png"),
        &CropParams::default(),
    )
}
```

Crop in-memory to `CroppedImage`
--------------------------------
```rust,no_run
use std::path::Path;
use autocrop::{autocrop_to_buffer, CropParams};

fn main() -> autocrop::Result<()> {
    let img = autocrop_to_buffer(Path::new("uploaded_logo.png"), &CropParams::default())?;

    println!(
        "{}x{} (source {}x{}, cropped: {})",
        img.width,
        img.height,
        img.source_width,
        img.source_height,
        img.was_cropped()
    );
    Ok(())
}
```

One decode, several outputs
---------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use autocrop::{autocrop_to_paths, CropParams};

fn main() -> autocrop::Result<()> {
    let outputs = [
        PathBuf::from("public/logo.png"),
        PathBuf::from("public/favicon.png"),
    ];
    autocrop_to_paths(Path::new("uploaded_logo.png"), &outputs, &CropParams::default())?;
    Ok(())
}
```

Behavior
--------
- Sources without an alpha channel are converted to RGBA with every pixel
  fully opaque; their bounding box then spans the full extent and nothing
  is trimmed.
- A fully transparent image has no bounding box and is written unmodified,
  never as an empty raster.
- Output is always PNG: lossless, alpha-preserving, overwriting existing
  files.

Error handling
--------------
All public functions return `autocrop::Result<T>`; match on `autocrop::Error`
to handle specific cases, e.g. I/O or image codec errors.

```rust,no_run
use std::path::Path;
use autocrop::{autocrop_to_path, CropParams, Error};

fn main() {
    match autocrop_to_path(Path::new("/bad/path.png"), Path::new("/out.png"), &CropParams::default()) {
        Ok(()) => {}
        Err(Error::Io(e)) => eprintln!("I/O error: {e}"),
        Err(Error::Image(e)) => eprintln!("Codec error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`BoundingBox`, `OutputFormat`).
- [`io`] — raster reader and PNG writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::CropParams;
pub use error::{Error, Result};
pub use types::{BoundingBox, OutputFormat};

// High-level API re-exports
pub use api::{
    CroppedImage, autocrop_to_buffer, autocrop_to_path, autocrop_to_paths, save_cropped,
};
