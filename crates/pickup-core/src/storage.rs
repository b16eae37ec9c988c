//! Durable local storage trait.
//!
//! The store mirrors a subset of its state (`authorization`, `userId`,
//! `userInfo`, `theme`) to a string-keyed persistent key-value store. The
//! mirror is best-effort: writes happen synchronously on every committing
//! mutation and are read once at store construction to seed initial state.

use crate::error::Result;

/// Storage keys mirrored by the session store.
pub mod keys {
    pub const AUTHORIZATION: &str = "authorization";
    pub const USER_ID: &str = "userId";
    pub const USER_INFO: &str = "userInfo";
    pub const THEME: &str = "theme";
}

/// String-keyed persistent key-value store.
///
/// Implementations must survive process restart. The session store treats
/// failures as non-fatal and only logs them.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
