//! Time source for envelope timestamps

use std::time::{SystemTime, UNIX_EPOCH};

/// Capability that supplies the encode-time timestamp.
///
/// Injected via [`crate::TokenCodec::with_time_source`] so tests can pin a
/// fixed value instead of reading the wall clock.
pub trait TimeSource: Send + Sync {
    /// Current time as whole seconds since the Unix epoch.
    fn unix_now(&self) -> u32;
}

/// Reads the system clock. The default time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_now(&self) -> u32 {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        // The timestamp field is 4 bytes; clamp rather than wrap past 2106
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}
