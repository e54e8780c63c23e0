//! TTL Cache - An in-process key/value cache
//!
//! Stores byte values under string keys with per-entry time-to-live, and
//! offers a background janitor that sweeps expired entries.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_janitor;
