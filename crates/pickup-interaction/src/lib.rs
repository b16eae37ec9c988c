//! Interaction layer for the Pickup client.
//!
//! Home of the HTTP implementation of the backend API contract.

pub mod http_api;

pub use http_api::HttpBackendApi;
