//! Configuration for the ID allocator

mod builder;

use thiserror::Error;

pub use builder::AllocatorConfigBuilder;
use builder::{
    DEFAULT_DATACENTER_ID_BITS, DEFAULT_EPOCH, DEFAULT_SEQUENCE_BITS, DEFAULT_SPIN_YIELD_EVERY,
    DEFAULT_WORKER_ID_BITS,
};

/// Errors raised while validating an allocator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker ID does not fit in the configured worker bits
    #[error("Worker ID {worker_id} is invalid. Allowed range is 0..={max}")]
    InvalidWorkerId { worker_id: i64, max: i64 },
    /// Datacenter ID does not fit in the configured datacenter bits
    #[error("Datacenter ID {datacenter_id} is invalid. Allowed range is 0..={max}")]
    InvalidDatacenterId { datacenter_id: i64, max: i64 },
    /// Worker, datacenter and sequence bits leave no room for the timestamp
    #[error(
        "Bit layout {worker_id_bits}+{datacenter_id_bits}+{sequence_bits} exceeds {max} bits",
        max = AllocatorConfig::MAX_LAYOUT_BITS
    )]
    BitLayoutOverflow {
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
    },
}

/// Bit layout and epoch of an [`Allocator`](crate::Allocator).
///
/// ```text
/// | 1 bit | timestamp | datacenter | worker | sequence |
/// | sign  | 63 - rest | d bits     | w bits | s bits   |
/// ```
///
/// Shifts and masks are derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorConfig {
    epoch: i64,
    worker_id_bits: u8,
    datacenter_id_bits: u8,
    sequence_bits: u8,
    spin_yield_every: u32,

    worker_shift: u8,
    datacenter_shift: u8,
    timestamp_shift: u8,
    sequence_mask: i64,
    max_worker_id: i64,
    max_datacenter_id: i64,
    timestamp_mask: i64,
}

impl AllocatorConfig {
    /// Bits available below the sign bit
    pub const ID_BITS: u8 = 63;
    /// Largest combined width of worker, datacenter and sequence bits
    pub const MAX_LAYOUT_BITS: u8 = Self::ID_BITS - 1;

    /// Mask with the lowest `bits` bits set, `bits` in `0..=63`
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> i64 {
        i64::MAX >> (Self::ID_BITS - bits)
    }

    /// Create a configuration with the given epoch (ms since Unix epoch) and bit widths
    pub fn new(
        epoch: i64,
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
    ) -> Result<Self, ConfigError> {
        Self::validate_layout(worker_id_bits, datacenter_id_bits, sequence_bits)?;
        Ok(Self::from_layout(
            epoch,
            worker_id_bits,
            datacenter_id_bits,
            sequence_bits,
            DEFAULT_SPIN_YIELD_EVERY,
        ))
    }

    /// Create a new configuration builder
    pub fn builder() -> AllocatorConfigBuilder {
        AllocatorConfigBuilder::new()
    }

    fn validate_layout(
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
    ) -> Result<(), ConfigError> {
        let total = worker_id_bits as u16 + datacenter_id_bits as u16 + sequence_bits as u16;
        if total > Self::MAX_LAYOUT_BITS as u16 {
            return Err(ConfigError::BitLayoutOverflow {
                worker_id_bits,
                datacenter_id_bits,
                sequence_bits,
            });
        }
        Ok(())
    }

    /// Derive shifts and masks. The layout must already be validated.
    const fn from_layout(
        epoch: i64,
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
        spin_yield_every: u32,
    ) -> Self {
        let timestamp_shift = sequence_bits + worker_id_bits + datacenter_id_bits;
        Self {
            epoch,
            worker_id_bits,
            datacenter_id_bits,
            sequence_bits,
            spin_yield_every,
            worker_shift: sequence_bits,
            datacenter_shift: sequence_bits + worker_id_bits,
            timestamp_shift,
            sequence_mask: Self::calculate_mask(sequence_bits),
            max_worker_id: Self::calculate_mask(worker_id_bits),
            max_datacenter_id: Self::calculate_mask(datacenter_id_bits),
            timestamp_mask: Self::calculate_mask(Self::ID_BITS - timestamp_shift),
        }
    }

    pub(crate) fn from_builder(b: AllocatorConfigBuilder) -> Result<Self, ConfigError> {
        Self::validate_layout(b.worker_id_bits, b.datacenter_id_bits, b.sequence_bits)?;
        Ok(Self::from_layout(
            b.epoch,
            b.worker_id_bits,
            b.datacenter_id_bits,
            b.sequence_bits,
            b.spin_yield_every,
        ))
    }

    /// Check a worker/datacenter pair against this layout
    pub fn validate_ids(&self, worker_id: i64, datacenter_id: i64) -> Result<(), ConfigError> {
        if !(0..=self.max_worker_id).contains(&worker_id) {
            return Err(ConfigError::InvalidWorkerId {
                worker_id,
                max: self.max_worker_id,
            });
        }
        if !(0..=self.max_datacenter_id).contains(&datacenter_id) {
            return Err(ConfigError::InvalidDatacenterId {
                datacenter_id,
                max: self.max_datacenter_id,
            });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    #[inline(always)]
    pub const fn datacenter_id_bits(&self) -> u8 {
        self.datacenter_id_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    /// Bits left for the epoch-relative timestamp
    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        Self::ID_BITS - self.timestamp_shift
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> i64 {
        self.max_worker_id
    }

    #[inline(always)]
    pub const fn max_datacenter_id(&self) -> i64 {
        self.max_datacenter_id
    }

    /// Largest sequence value, also the mask applied on increment
    #[inline(always)]
    pub const fn max_sequence(&self) -> i64 {
        self.sequence_mask
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn worker_shift(&self) -> u8 {
        self.worker_shift
    }

    #[inline(always)]
    pub const fn datacenter_shift(&self) -> u8 {
        self.datacenter_shift
    }

    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> i64 {
        self.sequence_mask
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> i64 {
        self.timestamp_mask
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::from_layout(
            DEFAULT_EPOCH,
            DEFAULT_WORKER_ID_BITS,
            DEFAULT_DATACENTER_ID_BITS,
            DEFAULT_SEQUENCE_BITS,
            DEFAULT_SPIN_YIELD_EVERY,
        )
    }
}
