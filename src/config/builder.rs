//! AllocatorConfig builder for constructing configuration

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AllocatorConfig, ConfigError};

/// Default configuration values
pub(super) const DEFAULT_EPOCH: i64 = 1420041600000; // January 1, 2015 00:00 UTC+8
pub(super) const DEFAULT_WORKER_ID_BITS: u8 = 5;
pub(super) const DEFAULT_DATACENTER_ID_BITS: u8 = 5;
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for AllocatorConfig
///
/// With the `serde` feature the builder can be deserialized from an
/// application's configuration; absent fields keep their defaults.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AllocatorConfigBuilder {
    pub(super) epoch: i64,
    pub(super) worker_id_bits: u8,
    pub(super) datacenter_id_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) spin_yield_every: u32,
}

impl AllocatorConfigBuilder {
    /// Create a new AllocatorConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            datacenter_id_bits: DEFAULT_DATACENTER_ID_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the epoch from a UTC instant
    pub fn epoch_at(mut self, at: DateTime<Utc>) -> Self {
        self.epoch = at.timestamp_millis();
        self
    }

    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.worker_id_bits = bits;
        self
    }

    pub const fn datacenter_id_bits(mut self, bits: u8) -> Self {
        self.datacenter_id_bits = bits;
        self
    }

    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Yield the thread every N polls while waiting for the next millisecond; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Validate the bit layout and build the final AllocatorConfig
    pub fn build(self) -> Result<AllocatorConfig, ConfigError> {
        AllocatorConfig::from_builder(self)
    }
}

impl Default for AllocatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
