use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_SEED;

/// Generation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory under which each suite gets its own subdirectory
    pub output_root: PathBuf,
    /// Seed of the velocity jitter source, applied once per run
    pub seed: u64,
    /// File extension of emitted scenes
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            seed: DEFAULT_SEED,
            extension: "xml".to_string(),
        }
    }
}
