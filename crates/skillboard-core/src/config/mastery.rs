//! Mastery progress-tracker proxy configuration.

use serde::{Deserialize, Serialize};

/// Settings for the upstream progress-tracker service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryConfig {
    /// Base URL of the progress tracker (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MasteryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8006".to_string()
}

fn default_timeout() -> u64 {
    10
}
