use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BufferConfig {
    /// Holes shorter than this (seconds) are treated as contiguous data
    #[serde(default = "default_max_hole_duration")]
    pub max_hole_duration: f64,
}

fn default_max_hole_duration() -> f64 {
    0.5
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            max_hole_duration: default_max_hole_duration(),
        }
    }
}
