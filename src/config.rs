//! Configuration Module
//!
//! Loads the demo host's settings from environment variables.

use std::env;
use std::time::Duration;

/// Host configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Janitor sweep interval in seconds
    pub janitor_interval: u64,
    /// TTL in seconds applied to the demo entry
    pub default_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `JANITOR_INTERVAL` - Sweep frequency in seconds (default: 2)
    /// - `DEFAULT_TTL` - TTL in seconds for the demo entry (default: 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            janitor_interval: env_or("JANITOR_INTERVAL", defaults.janitor_interval),
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
        }
    }

    pub fn janitor_interval(&self) -> Duration {
        Duration::from_secs(self.janitor_interval)
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    /// How long the demo waits before reading its entry again: one second
    /// past the TTL, saturating for huge TTLs.
    pub fn expiry_wait(&self) -> Duration {
        self.default_ttl().saturating_add(Duration::from_secs(1))
    }
}

fn env_or(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            janitor_interval: 2,
            default_ttl: 3,
        }
    }
}
