//! Pricing-config provider
//!
//! Wraps a [`ConfigStore`] with a time-expiry cache and a fallback policy:
//! a failed refresh silently retains the previous snapshot, a failure with no
//! snapshot at all falls back to [`PricingConfig::fallback`]. Callers of
//! [`ConfigProvider::snapshot`] always get a usable config — store errors stop
//! here and are only logged.
//!
//! Staleness within the cache window is tolerated by design, so concurrent
//! refreshes need no coordination: last writer wins.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use viaplan_core::model::PricingConfig;

/// How long a fetched snapshot is served before the store is consulted again.
pub const DEFAULT_CACHE_WINDOW: Duration = Duration::from_secs(60 * 60);

/// Errors raised by a config store. Absorbed by [`ConfigProvider`]; never
/// surfaced to plan computation.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// The stored document is not valid pricing-config JSON
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Source of pricing-config snapshots.
///
/// The production store is a JSON document in a blob bucket; tests and the
/// CLI use [`FileStore`]. Anything that can produce a [`PricingConfig`] fits.
pub trait ConfigStore {
    fn fetch(&self) -> Result<PricingConfig, ConfigError>;
}

/// Config store reading a JSON document from the local filesystem.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for FileStore {
    fn fetch(&self) -> Result<PricingConfig, ConfigError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Caching provider over a [`ConfigStore`].
pub struct ConfigProvider<S> {
    store: S,
    cache_window: Duration,
    cached: Option<(PricingConfig, Instant)>,
}

impl<S: ConfigStore> ConfigProvider<S> {
    pub fn new(store: S) -> Self {
        Self::with_cache_window(store, DEFAULT_CACHE_WINDOW)
    }

    pub fn with_cache_window(store: S, cache_window: Duration) -> Self {
        Self {
            store,
            cache_window,
            cached: None,
        }
    }

    /// Current config snapshot. Infallible: serves the cache, then a fresh
    /// fetch, then the hardcoded fallback, in that order.
    pub fn snapshot(&mut self) -> PricingConfig {
        self.refresh_if_stale();
        match &self.cached {
            Some((config, _)) => config.clone(),
            None => {
                debug!("no config snapshot available, using fallback defaults");
                PricingConfig::fallback()
            }
        }
    }

    /// Re-fetch from the store if the cached snapshot has expired.
    ///
    /// A failed fetch keeps the previous snapshot (or leaves the provider
    /// empty, in which case `snapshot` falls back to defaults). The next call
    /// simply tries again; there is no retry or backoff here.
    pub fn refresh_if_stale(&mut self) {
        if let Some((_, fetched_at)) = &self.cached {
            if fetched_at.elapsed() < self.cache_window {
                return;
            }
        }

        match self.store.fetch() {
            Ok(config) => {
                debug!(destinations = config.destinations.len(), "pricing config refreshed");
                self.cached = Some((config, Instant::now()));
            }
            Err(err) => {
                warn!("pricing config refresh failed, keeping previous snapshot: {err}");
            }
        }
    }
}
