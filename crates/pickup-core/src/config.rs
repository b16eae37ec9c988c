//! Client configuration.
//!
//! Loaded from `config.toml` under the platform config directory by the
//! infrastructure layer; every field has a default so a missing file is not
//! an error.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Overrides the platform-derived directory for the durable storage
    /// mirror. Mainly useful for tests and portable installs.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            storage_dir: None,
        }
    }
}
