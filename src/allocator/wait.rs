//! Wait strategy for sequence exhaustion
//!
//! Busy-polls the clock until it moves past the exhausted millisecond

use std::thread;

/// Poll `get_time` until it returns a value greater than `from_timestamp`.
///
/// Every poll issues a spin-loop hint; every `yield_every` polls the thread
/// yields (0 disables yielding). There is no timeout.
#[inline]
pub fn spin_until_after<F>(from_timestamp: i64, yield_every: u32, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    let mut polls: u32 = 0;
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }

        std::hint::spin_loop();

        polls = polls.wrapping_add(1);
        if yield_every != 0 && polls % yield_every == 0 {
            thread::yield_now();
        }
    }
}
