//! Rotary encoder step tracker.
//!
//! Pure logic, no hardware dependencies. Consumes the absolute encoder
//! count, produces discrete left/right steps. Fully testable on host.
//!
//! The hardware counter advances 4 ticks per detent; anything finer is
//! quadrature jitter. Sub-step motion is retained, not discarded: the
//! stored position only advances by whole emitted steps, so a series of
//! partial rotations adds up to the exact step count with no drift.

use crate::config::InputConfig;

/// Encoder step tracker.
///
/// Owns the last observed absolute position. The position is mutated here
/// and nowhere else; external code never resets it behind the tracker's
/// back (re-basing goes through [`sync`](Self::sync)).
#[derive(Clone, Copy, Debug)]
pub struct EncoderTracker {
    prev_pos: i64,
    ticks_per_step: i64,
}

impl EncoderTracker {
    /// Create a tracker starting at position 0.
    pub fn new(config: &InputConfig) -> Self {
        Self {
            prev_pos: 0,
            ticks_per_step: config.ticks_per_step,
        }
    }

    /// Re-base on the current hardware count, discarding pending motion.
    ///
    /// Call once at startup with the first reading so the power-on count
    /// does not replay as a burst of steps.
    pub fn sync(&mut self, pos: i64) {
        self.prev_pos = pos;
    }

    /// Consume accumulated motion, up to `max_steps` whole steps.
    ///
    /// # Arguments
    ///
    /// * `current` - Absolute encoder count as read this poll
    /// * `max_steps` - Cap on steps to consume this call
    ///
    /// # Returns
    ///
    /// Signed step count: positive = right, negative = left, 0 = no whole
    /// step accumulated. The stored position advances only by the steps
    /// returned; the sub-step remainder and any capped-off whole steps stay
    /// pending for the next poll.
    pub fn take_steps(&mut self, current: i64, max_steps: usize) -> i32 {
        let delta = current - self.prev_pos;
        if delta == 0 {
            return 0;
        }

        let steps = (delta.abs() / self.ticks_per_step).min(max_steps as i64);
        if steps == 0 {
            return 0;
        }

        if delta > 0 {
            self.prev_pos += steps * self.ticks_per_step;
            steps as i32
        } else {
            self.prev_pos -= steps * self.ticks_per_step;
            -(steps as i32)
        }
    }

    /// Last observed position (advanced only by emitted steps).
    pub const fn position(&self) -> i64 {
        self.prev_pos
    }
}
