//! Capability seams between the core and the hardware.
//!
//! The core never calls a peripheral directly. It reads through
//! [`InputSource`] and writes through [`IntentSink`], so the whole
//! interpretation pipeline runs against fakes on the host.

use crate::intent::Intent;
use crate::sample::InputSample;

/// Where raw input comes from.
///
/// One implementation wraps the real peripherals; tests feed scripted
/// samples.
pub trait InputSource {
    /// Monotonic millisecond counter. Wrapping is fine; consumers use
    /// wrapping arithmetic.
    fn now_ms(&mut self) -> u32;

    /// Read encoder, touch and button once. Called exactly once per poll.
    fn read(&mut self) -> InputSample;
}

/// Where intents go.
///
/// Fire-and-forget: the transport performs the key transaction (with its
/// own pacing) and its failures are not observable to the core.
pub trait IntentSink {
    fn send(&mut self, intent: Intent);
}
