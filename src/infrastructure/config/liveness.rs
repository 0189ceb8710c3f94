//! Liveness endpoint configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

/// Liveness HTTP endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LivenessConfig {
    /// Serve the endpoint.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Socket address to bind.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            bind: default_bind(),
        }
    }
}
