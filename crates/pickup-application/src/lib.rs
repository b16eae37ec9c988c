//! Application layer for the Pickup client.
//!
//! This crate provides the session store: the single state container that
//! mediates authentication, mirrors session fields to durable storage, and
//! drives paginated order fetching with replace/append accumulation.

pub mod bootstrap;
pub mod outcome;
pub mod store;

pub use outcome::{ActionResult, PageRequest, PageStatus};
pub use store::SessionStore;
