//! Shared types used across AUTOCROP.
//! Includes the `BoundingBox` of non-transparent content and the
//! `OutputFormat` for persisted crops.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossless, alpha-preserving
    Png,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
        }
    }
}

/// Minimal axis-aligned rectangle enclosing all pixels with non-zero alpha.
/// Coordinates are pixel positions, inclusive on all sides.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// True when the box spans the whole `width` x `height` extent.
    pub fn is_full_extent(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right + 1 == width && self.bottom + 1 == height
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})..=({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
