//! Viewer configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment
//! variables (or a `.env` file via `dotenvy`), with defaults matching
//! the local update endpoint.

use std::str::FromStr;

use crate::domain::FileId;
use crate::view::ViewMode;

/// Top-level viewer configuration.
///
/// Loaded once at startup via [`ViewConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// WebSocket endpoint serving live updates
    /// (e.g. `ws://localhost:8000/ws`).
    pub endpoint: String,

    /// File the mounted view is bound to.
    pub file: FileId,

    /// View behavior: subscribe or probe.
    pub mode: ViewMode,
}

impl ViewConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or cannot be
    /// parsed. Calls `dotenvy::dotenv().ok()` to optionally load a
    /// `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let endpoint = std::env::var("WS_ENDPOINT")
            .unwrap_or_else(|_| "ws://localhost:8000/ws".to_string());

        let file = FileId::new(std::env::var("VIEW_FILE").unwrap_or_else(|_| "test".to_string()));

        let mode = parse_env("VIEW_MODE", ViewMode::Subscribe);

        Self {
            endpoint,
            file,
            mode,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on
/// missing or invalid values.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
