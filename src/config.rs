//! Input interpretation thresholds.
//!
//! One plain struct, owned by the [`IntentEmitter`](crate::emitter::IntentEmitter).
//! Nothing here is persisted; the device boots with defaults every time.

/// Input interpretation configuration.
#[derive(Clone, Copy, Debug)]
pub struct InputConfig {
    /// Raw encoder ticks per logical step (quadrature de-noising).
    pub ticks_per_step: i64,

    /// Hold duration that turns a button press into repeat-Delete mode, in ms.
    pub long_press_ms: u32,

    /// Interval between repeated Delete intents while held, in ms.
    pub repeat_ms: u32,

    /// Touch panel width in pixels. The left half is the Escape zone,
    /// the right half the Shift zone.
    pub screen_width: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            ticks_per_step: 4,
            long_press_ms: 3000,
            repeat_ms: 500,
            screen_width: 240,
        }
    }
}

impl InputConfig {
    /// Create config for a given panel width with default timing.
    pub fn with_screen_width(screen_width: u16) -> Self {
        Self {
            screen_width,
            ..Default::default()
        }
    }
}
