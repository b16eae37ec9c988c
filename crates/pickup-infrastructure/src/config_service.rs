//! Configuration loading.
//!
//! Reads `config.toml` from the pickup config directory; a missing file
//! yields the defaults. `PICKUP_BASE_URL` overrides the configured base URL
//! for development against a proxied backend.

use std::path::Path;

use pickup_core::config::ClientConfig;
use pickup_core::error::Result;
use tracing::debug;

use crate::paths::PickupPaths;

/// Loads the client configuration from the platform config directory.
pub fn load_config(paths: &PickupPaths) -> Result<ClientConfig> {
    let mut config = load_config_file(&paths.config_file())?;
    if let Ok(base_url) = std::env::var("PICKUP_BASE_URL") {
        if !base_url.is_empty() {
            debug!(%base_url, "base URL overridden from environment");
            config.base_url = base_url;
        }
    }
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        return Ok(ClientConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config_file(&PathBuf::from("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_reads_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"https://pickup.example/api\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.base_url, "https://pickup.example/api");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "  \n").unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
