//! # distid
//!
//! Snowflake-style 64-bit ID allocation.
//!
//! Each ID packs, from the most significant bit down:
//! - a zero sign bit
//! - milliseconds since a configurable epoch (41 bits by default)
//! - a datacenter ID (5 bits by default)
//! - a worker ID (5 bits by default)
//! - a per-millisecond sequence (12 bits by default)
//!
//! IDs from one [`Allocator`] are unique and increasing as long as the wall
//! clock does not move backwards; allocators with distinct
//! (worker, datacenter) pairs never collide.
//!
//! ```
//! let id = distid::next_id().unwrap();
//! assert!(id > 0);
//! ```

#![forbid(unsafe_code)]

mod allocator;
mod clock;
mod config;
mod error;
mod extractor;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;

// Re-export main types
pub use allocator::Allocator;
pub use clock::{unix_time_ms, Clock, SystemClock};
pub use config::{AllocatorConfig, AllocatorConfigBuilder, ConfigError};
pub use error::DistIdError;
pub use extractor::{IdComponents, IdExtractor};

/// Worker 0, datacenter 0, default layout. The ids fit any layout, so
/// construction cannot fail.
static DEFAULT_ALLOCATOR: Lazy<Allocator> =
    Lazy::new(|| Allocator::build(AllocatorConfig::default(), 0, 0, SystemClock));

/// The process-wide allocator behind [`next_id`] and [`next_string_id`].
///
/// It uses worker 0 and datacenter 0, so it gives no uniqueness guarantee
/// across processes; construct an [`Allocator`] per node for that.
pub fn default_allocator() -> &'static Allocator {
    &DEFAULT_ALLOCATOR
}

/// Allocate an ID from the process-wide default allocator
pub fn next_id() -> Result<i64, DistIdError> {
    DEFAULT_ALLOCATOR.next_id()
}

/// Allocate a base-10 string ID from the process-wide default allocator
pub fn next_string_id() -> Result<String, DistIdError> {
    DEFAULT_ALLOCATOR.next_string_id()
}
