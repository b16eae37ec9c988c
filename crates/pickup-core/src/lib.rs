//! Core domain layer for the Pickup client.
//!
//! This crate holds everything that is pure and network-free: the session
//! and order models, the state reducer, the navigation guard, the theme
//! resolver, and the traits that the infrastructure and interaction layers
//! implement (`KeyValueStore`, `BackendApi`).

pub mod api;
pub mod config;
pub mod error;
pub mod order;
pub mod route;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;

// Re-export common error type
pub use error::{PickupError, Result};
