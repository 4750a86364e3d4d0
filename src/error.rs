use thiserror::Error;

use crate::config::ConfigError;

/// Represents errors that can occur while constructing an allocator or allocating IDs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistIdError {
    /// Worker ID, datacenter ID or bit layout rejected at construction
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Clock moved backwards relative to the last allocation
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: i64 },
}

impl DistIdError {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_clock_rollback(&self) -> bool {
        matches!(self, Self::ClockMovedBackwards { .. })
    }
}
