//! Infrastructure layer for the Pickup client.
//!
//! Provides the durable storage mirror (a JSON-file-backed key-value store
//! with atomic writes), platform path management, the configuration loader,
//! and an in-memory store used as a test double.

pub mod config_service;
pub mod json_store;
pub mod memory_store;
pub mod paths;

pub use config_service::load_config;
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use paths::PickupPaths;
