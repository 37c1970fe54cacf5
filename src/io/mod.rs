//! I/O layer for decoding raster inputs and writing encoded outputs.
//! Provides the `reader` for format-sniffed decoding and `writers`
//! for lossless PNG output.
pub mod reader;
pub use reader::read_image;

pub mod writers;
