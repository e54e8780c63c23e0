//! Error types for the cache
//!
//! Both variants are ordinary cache misses reported by `Cache::get`.

use thiserror::Error;

// == Cache Error Enum ==
/// Outcome of a failed cache lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key was never stored, was deleted, or was already swept
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key was present but its TTL had elapsed; the entry has been removed
    #[error("Key expired: {0}")]
    Expired(String),
}

impl CacheError {
    /// Returns the key the lookup was made for.
    pub fn key(&self) -> &str {
        match self {
            CacheError::NotFound(key) | CacheError::Expired(key) => key,
        }
    }

    /// True when the miss was caused by TTL expiry rather than absence.
    pub fn is_expired(&self) -> bool {
        matches!(self, CacheError::Expired(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache lookups.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CacheError::NotFound("a".to_string()).to_string(),
            "Key not found: a"
        );
        assert_eq!(
            CacheError::Expired("b".to_string()).to_string(),
            "Key expired: b"
        );
    }

    #[test]
    fn test_error_key_and_kind() {
        let err = CacheError::Expired("session".to_string());
        assert_eq!(err.key(), "session");
        assert!(err.is_expired());
        assert!(!CacheError::NotFound(String::new()).is_expired());
    }
}
