//! Operation result envelopes.
//!
//! Every store operation catches failures at its boundary and hands back one
//! of these plain structs; none of them ever propagates an error or panics.
//! Failed operations are re-invoked by the caller, never retried internally.

use serde_json::Value;

/// Result of an authentication-flow operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    pub success: bool,
    /// Human-readable message. Present exactly when `success` is false.
    pub error: Option<String>,
    /// Raw response payload. Present for operations documented to carry one.
    pub data: Option<Value>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}

/// A paginated fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Forces a replace commit even past page 1.
    pub reset: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            reset: false,
        }
    }
}

impl PageRequest {
    pub fn first() -> Self {
        Self::default()
    }

    pub fn page(page: u32) -> Self {
        Self { page, reset: false }
    }
}

/// Result of a paginated fetch.
///
/// `has_more` is inferred from a full page, not a server-side count: a total
/// that is an exact multiple of the page size yields one extra
/// `has_more: true` whose next page comes back empty. Known limitation,
/// preserved on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStatus {
    pub success: bool,
    pub has_more: bool,
}

impl PageStatus {
    pub fn fetched(page_len: usize, page_size: usize) -> Self {
        Self {
            success: true,
            has_more: page_len == page_size,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            has_more: false,
        }
    }
}
