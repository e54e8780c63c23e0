//! Background Tasks Module
//!
//! Contains background tasks that run alongside cache users.
//!
//! # Tasks
//! - Janitor: Removes expired cache entries at a fixed interval

mod janitor;

pub use janitor::{spawn_janitor, MAX_JANITOR_INTERVAL, MIN_JANITOR_INTERVAL};
