//! Mutable allocation state guarded by the allocator's lock

/// Sequence within the active millisecond and the millisecond it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    /// Counter within `last_timestamp`, in `0..=max_sequence`
    pub sequence: i64,
    /// Wall-clock ms of the most recent allocation, [`State::UNSET`] before the first one
    pub last_timestamp: i64,
}

impl State {
    /// Sentinel for "no allocation yet"
    pub const UNSET: i64 = -1;

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            sequence: 0,
            last_timestamp: Self::UNSET,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_unset() {
        let state = State::new();
        assert_eq!(state.last_timestamp, State::UNSET);
        assert_eq!(state.sequence, 0);
    }

    #[test]
    fn test_state_default() {
        assert_eq!(State::default(), State::new());
    }
}
