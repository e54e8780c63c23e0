//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with its optional expiration instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Owned copy of the stored bytes
    pub value: Vec<u8>,
    /// Absolute expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, copying `value`.
    ///
    /// A zero `ttl` means the entry never expires.
    pub fn new(value: &[u8], ttl: Duration) -> Self {
        Self::with_start(value, ttl, Instant::now())
    }

    /// Creates an entry whose TTL is measured from `now`.
    pub(crate) fn with_start(value: &[u8], ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self {
            value: value.to_vec(),
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry had expired at `now`.
    ///
    /// Boundary condition: an entry is expired strictly after its expiration
    /// instant, so at `now == expires_at` it is still readable.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(b"test_value", Duration::ZERO);

        assert_eq!(entry.value, b"test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(Instant::now()));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::with_start(b"test_value", Duration::from_secs(60), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"test_value", Duration::from_millis(50));

        assert!(!entry.is_expired_at(Instant::now()));

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired_at(Instant::now()));
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let entry = CacheEntry::new(b"test_value", Duration::MAX);

        assert!(entry.expires_at.is_none());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::with_start(b"test", Duration::from_secs(1), now);
        let expires = entry.expires_at.unwrap();

        assert!(!entry.is_expired_at(expires), "Not expired at the instant itself");
        assert!(entry.is_expired_at(expires + Duration::from_nanos(1)));
    }

    #[test]
    fn test_no_expiration_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::with_start(b"forever", Duration::ZERO, now);

        assert!(!entry.is_expired_at(now + Duration::from_secs(365 * 24 * 3600)));
    }

    #[test]
    fn test_entry_copies_value() {
        let mut buffer = b"original".to_vec();
        let entry = CacheEntry::new(&buffer, Duration::ZERO);

        buffer[0] = b'X';

        assert_eq!(entry.value, b"original");
    }
}
