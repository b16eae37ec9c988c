//! Unified path management for pickup configuration and storage files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/pickup/            # Config directory (XDG on Linux, equivalent elsewhere)
//! ├── config.toml              # Client configuration
//! └── local_storage.json       # Durable storage mirror (session + theme)
//! ```

use std::path::PathBuf;

use pickup_core::error::{PickupError, Result};

/// Unified path management for pickup.
pub struct PickupPaths {
    config_dir: PathBuf,
}

impl PickupPaths {
    /// Resolves the platform config directory for pickup.
    ///
    /// Fails only when the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| PickupError::config("Cannot find home directory"))?;
        Ok(Self {
            config_dir: base.join("pickup"),
        })
    }

    /// Uses an explicit directory instead of the platform default.
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the pickup configuration directory, creating it if needed.
    pub fn ensure_config_dir(&self) -> Result<&PathBuf> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(&self.config_dir)
    }

    /// Path to the client configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Path to the durable storage mirror.
    pub fn storage_file(&self) -> PathBuf {
        self.config_dir.join("local_storage.json")
    }
}
