use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Crop parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParams {
    pub format: OutputFormat,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
        }
    }
}
