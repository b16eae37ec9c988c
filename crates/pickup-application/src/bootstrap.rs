//! Composition root.
//!
//! Wires the session store to the real backend client and the file-backed
//! storage mirror. The store itself never knows about either concrete type;
//! everything reaches it as a trait object.

use std::sync::Arc;

use anyhow::{Context, Result};
use pickup_core::config::ClientConfig;
use pickup_infrastructure::{JsonFileStore, PickupPaths, load_config};
use pickup_interaction::HttpBackendApi;
use tracing::debug;

use crate::store::SessionStore;

/// Builds a `SessionStore` from the platform config directory.
///
/// Loads `config.toml` (defaults when absent), opens the storage mirror, and
/// connects the HTTP client. Seeding from the mirror happens inside
/// `SessionStore::new`.
pub fn build_store() -> Result<SessionStore> {
    let paths = PickupPaths::new().context("resolving config directory")?;
    let config = load_config(&paths).context("loading client configuration")?;
    build_store_with(&paths_for(&config, paths), &config)
}

/// Builds a `SessionStore` from an explicit config, bypassing file loading.
pub fn build_store_with(paths: &PickupPaths, config: &ClientConfig) -> Result<SessionStore> {
    paths.ensure_config_dir().context("creating config directory")?;
    let storage =
        JsonFileStore::new(paths.storage_file()).context("opening durable storage mirror")?;
    let api = HttpBackendApi::new(config);
    debug!(base_url = %config.base_url, "session store wired");
    Ok(SessionStore::new(Arc::new(api), Arc::new(storage)))
}

fn paths_for(config: &ClientConfig, default_paths: PickupPaths) -> PickupPaths {
    match &config.storage_dir {
        Some(dir) => PickupPaths::with_dir(dir.clone()),
        None => default_paths,
    }
}
