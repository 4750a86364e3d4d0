//! Core allocator implementation
//!
//! Split into modules for testability:
//! - `state` - Mutable sequence and last timestamp guarded by the lock
//! - `wait` - Spin strategy for an exhausted sequence
//! - `generate` - ID allocation logic

mod generate;
pub(crate) mod state;
mod wait;

use parking_lot::Mutex;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::AllocatorConfig;
use crate::error::DistIdError;
use crate::extractor::IdExtractor;

use state::State;

/// Snowflake-style ID allocator.
///
/// Every call to [`next_id`](Self::next_id) runs under a single mutex, so one
/// instance can be shared freely between threads (for example behind an
/// [`Arc`](std::sync::Arc)) and never returns the same ID twice.
///
/// ```
/// use distid::Allocator;
///
/// let allocator = Allocator::with_defaults(1, 2).unwrap();
/// let id = allocator.next_id().unwrap();
///
/// let parts = allocator.extract.decompose(id);
/// assert_eq!(parts.worker_id, 1);
/// assert_eq!(parts.datacenter_id, 2);
/// ```
#[derive(Debug)]
pub struct Allocator<C = SystemClock> {
    pub(crate) state: Mutex<State>,
    node_bits: i64,
    clock: C,

    worker_id: i64,
    datacenter_id: i64,
    config: AllocatorConfig,
    pub extract: IdExtractor,
}

impl Allocator {
    /// Create an allocator from an explicit epoch and bit layout
    pub fn new(
        epoch: i64,
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
        worker_id: i64,
        datacenter_id: i64,
    ) -> Result<Self, DistIdError> {
        let config = AllocatorConfig::new(epoch, worker_id_bits, datacenter_id_bits, sequence_bits)?;
        Self::with_config(config, worker_id, datacenter_id)
    }

    /// Create with the default epoch and 5/5/12 bit layout
    pub fn with_defaults(worker_id: i64, datacenter_id: i64) -> Result<Self, DistIdError> {
        Self::with_config(AllocatorConfig::default(), worker_id, datacenter_id)
    }

    /// Create with a prepared configuration
    pub fn with_config(
        config: AllocatorConfig,
        worker_id: i64,
        datacenter_id: i64,
    ) -> Result<Self, DistIdError> {
        Self::with_clock(config, worker_id, datacenter_id, SystemClock)
    }
}

impl<C: Clock> Allocator<C> {
    /// Create with a custom time source
    pub fn with_clock(
        config: AllocatorConfig,
        worker_id: i64,
        datacenter_id: i64,
        clock: C,
    ) -> Result<Self, DistIdError> {
        config.validate_ids(worker_id, datacenter_id)?;
        Ok(Self::build(config, worker_id, datacenter_id, clock))
    }

    /// Assemble an allocator whose ids are already known to fit the layout
    pub(crate) fn build(
        config: AllocatorConfig,
        worker_id: i64,
        datacenter_id: i64,
        clock: C,
    ) -> Self {
        debug!(
            worker_id,
            datacenter_id,
            epoch = config.epoch(),
            worker_id_bits = config.worker_id_bits(),
            datacenter_id_bits = config.datacenter_id_bits(),
            sequence_bits = config.sequence_bits(),
            "created id allocator"
        );
        Self {
            state: Mutex::new(State::new()),
            node_bits: Self::compute_node_bits(worker_id, datacenter_id, &config),
            clock,
            worker_id,
            datacenter_id,
            config,
            extract: IdExtractor::new(config),
        }
    }

    #[inline(always)]
    fn compute_node_bits(worker_id: i64, datacenter_id: i64, config: &AllocatorConfig) -> i64 {
        (datacenter_id << config.datacenter_shift()) | (worker_id << config.worker_shift())
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> i64 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn datacenter_id(&self) -> i64 {
        self.datacenter_id
    }

    #[inline(always)]
    pub const fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Combine an absolute timestamp (ms since Unix epoch) and sequence with this node's bits
    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: i64, sequence: i64) -> i64 {
        ((timestamp - self.config.epoch()) << self.config.timestamp_shift())
            | self.node_bits
            | sequence
    }
}
