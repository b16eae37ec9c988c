//! Theme preference and resolution.
//!
//! The stored preference is tri-state (`light`, `dark`, `system`). The
//! effective theme is derived on every read: `system` follows whatever the
//! host environment reports at call time, so the resolver never caches.

use serde::{Deserialize, Serialize};

/// Persisted theme preference. Survives logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Storage/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parses a stored preference. Unknown or corrupt values seed as
    /// `System`, the application default.
    pub fn from_storage(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

/// Effective theme after resolving `System` against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// Host-environment color scheme capability probe.
///
/// Abstracted as a trait so the resolver stays pure and the host query
/// (media query, OS setting, terminal capability) lives with the caller.
pub trait ColorSchemeProbe: Send + Sync {
    /// Whether the host currently matches a dark color scheme.
    fn prefers_dark(&self) -> bool;
    /// Whether the host can report a dark scheme at all.
    fn supports_dark(&self) -> bool;
    /// Whether the host can report a light scheme at all.
    fn supports_light(&self) -> bool;
}

/// Resolves a stored preference against the host probe.
///
/// Recomputed on each call. The host's reported scheme can change at
/// runtime, so the result must never be cached.
pub fn resolve(theme: Theme, probe: &dyn ColorSchemeProbe) -> ResolvedTheme {
    match theme {
        Theme::Light => ResolvedTheme::Light,
        Theme::Dark => ResolvedTheme::Dark,
        Theme::System => {
            if probe.prefers_dark() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Whether a `System` preference is usable on this host at all.
///
/// When neither scheme can be detected, the store downgrades the preference
/// to `Light` once at startup.
pub fn supports_color_scheme(probe: &dyn ColorSchemeProbe) -> bool {
    probe.supports_dark() || probe.supports_light()
}
