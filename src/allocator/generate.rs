//! ID allocation logic
//!
//! The whole read-check-update-compose sequence runs under the state lock

use tracing::{trace, warn};

use super::wait::spin_until_after;
use super::Allocator;
use crate::clock::Clock;
use crate::error::DistIdError;

impl<C: Clock> Allocator<C> {
    /// Allocate the next ID.
    ///
    /// Within one millisecond the sequence increments; once it wraps the call
    /// spins until the clock reaches the next millisecond. A clock reading
    /// earlier than the last allocation fails with
    /// [`DistIdError::ClockMovedBackwards`] and leaves the state untouched.
    pub fn next_id(&self) -> Result<i64, DistIdError> {
        let mut state = self.state.lock();
        let mut now = self.now_ms();

        if now < state.last_timestamp {
            let delta = state.last_timestamp - now;
            warn!(
                last_timestamp = state.last_timestamp,
                now,
                delta,
                worker_id = self.worker_id(),
                datacenter_id = self.datacenter_id(),
                "clock moved backwards, refusing to allocate id"
            );
            return Err(DistIdError::ClockMovedBackwards { delta });
        }

        if now == state.last_timestamp {
            state.sequence = (state.sequence + 1) & self.config().sequence_mask();
            if state.sequence == 0 {
                trace!(
                    timestamp = state.last_timestamp,
                    "sequence exhausted, waiting for next millisecond"
                );
                now = spin_until_after(
                    state.last_timestamp,
                    self.config().spin_yield_every(),
                    || self.now_ms(),
                );
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = now;
        Ok(self.assemble_id(now, state.sequence))
    }

    /// Allocate the next ID formatted in base 10
    pub fn next_string_id(&self) -> Result<String, DistIdError> {
        self.next_id().map(|id| id.to_string())
    }
}
