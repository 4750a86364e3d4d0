//! Time sources for ID allocation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock milliseconds since the Unix epoch.
///
/// The allocator reads its clock once per call while holding its lock, and
/// repeatedly while waiting out an exhausted sequence. Substitute a
/// controlled implementation to drive rollback or overflow deterministically.
///
/// ```
/// use distid::Clock;
///
/// struct FixedClock(i64);
///
/// impl Clock for FixedClock {
///     fn now_millis(&self) -> i64 {
///         self.0
///     }
/// }
///
/// assert_eq!(FixedClock(1234).now_millis(), 1234);
/// ```
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        unix_time_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
/// Times before 1970 come back negative.
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_millis() as i64,
        Err(before) => -(before.duration().as_millis() as i64),
    }
}
