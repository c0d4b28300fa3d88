//! Module: sample
//!
//! Purpose: raw input snapshot types. Represents everything the polling loop
//! reads from hardware in one pass: encoder count, touch point, button edges.
//!
//! Architecture:
//! - One `InputSample` per poll iteration, read once, then interpreted
//! - Copy types only, no references into hardware state
//! - Edge derivation (`EdgeDetector`) is pure so the HAL stays a thin wrapper
//!
//! Safety: Safe. No unsafe blocks.

/// One touch panel reading.
///
/// `x` is only meaningful while `active` is true. Coordinates outside the
/// panel are allowed; zone classification treats them as no zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchSample {
    /// True while a finger is on the panel.
    pub active: bool,
    /// Horizontal coordinate in pixels, 0 at the left edge.
    pub x: i32,
}

impl TouchSample {
    /// No finger on the panel.
    pub const INACTIVE: Self = Self { active: false, x: 0 };

    /// Create an active touch at the given x coordinate.
    pub const fn at(x: i32) -> Self {
        Self { active: true, x }
    }
}

/// Button edge flags for the current poll.
///
/// Stored as a single byte with bit flags:
/// - Bit 0: press edge seen this poll
/// - Bit 1: release edge seen this poll
///
/// Both bits can be set in one poll (tap shorter than the poll period).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEdges(u8);

impl ButtonEdges {
    /// Press edge bit mask (bit 0)
    pub const PRESS: u8 = 0x01;

    /// Release edge bit mask (bit 1)
    pub const RELEASE: u8 = 0x02;

    /// No edges this poll.
    pub const NONE: Self = Self(0);

    /// A press edge only.
    pub const PRESSED: Self = Self(Self::PRESS);

    /// A release edge only.
    pub const RELEASED: Self = Self(Self::RELEASE);

    /// Create edge flags from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get raw bits value.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if a press edge was seen this poll.
    pub const fn pressed(&self) -> bool {
        (self.0 & Self::PRESS) != 0
    }

    /// Check if a release edge was seen this poll.
    pub const fn released(&self) -> bool {
        (self.0 & Self::RELEASE) != 0
    }

    /// Check if no edges were seen this poll.
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// Pure level-to-edge converter.
///
/// The classifier consumes edges, the hardware provides a level. This keeps
/// the GPIO driver a one-line wrapper: sample the pin, feed the level here.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    /// Create a detector with the button assumed released.
    pub const fn new() -> Self {
        Self { last_level: false }
    }

    /// Feed the current debounced level (true = pressed), get this poll's edges.
    pub fn update(&mut self, level: bool) -> ButtonEdges {
        let edges = match (self.last_level, level) {
            (false, true) => ButtonEdges::PRESSED,
            (true, false) => ButtonEdges::RELEASED,
            _ => ButtonEdges::NONE,
        };
        self.last_level = level;
        edges
    }

    /// Current debounced level (true = pressed).
    pub const fn level(&self) -> bool {
        self.last_level
    }
}

/// Everything the polling loop reads from hardware in one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSample {
    /// Absolute encoder count, monotonically maintained by hardware.
    pub encoder_pos: i64,

    /// Current touch panel reading.
    pub touch: TouchSample,

    /// Button edges seen since the previous poll.
    pub button: ButtonEdges,
}

impl InputSample {
    /// A sample with no touch and no button activity at the given encoder count.
    pub const fn idle(encoder_pos: i64) -> Self {
        Self {
            encoder_pos,
            touch: TouchSample::INACTIVE,
            button: ButtonEdges::NONE,
        }
    }

    /// Check whether this sample carries any touch or button activity.
    ///
    /// Encoder movement is not considered here; only the tracker knows
    /// whether the count moved since its last observation.
    pub const fn is_quiet(&self) -> bool {
        !self.touch.active && self.button.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges_bits() {
        let press = ButtonEdges::PRESSED;
        assert!(press.pressed());
        assert!(!press.released());
        assert!(!press.is_none());

        let release = ButtonEdges::RELEASED;
        assert!(!release.pressed());
        assert!(release.released());

        let both = ButtonEdges::from_bits(ButtonEdges::PRESS | ButtonEdges::RELEASE);
        assert!(both.pressed());
        assert!(both.released());

        assert!(ButtonEdges::NONE.is_none());
    }

    #[test]
    fn test_edge_detector_press_release() {
        let mut det = EdgeDetector::new();

        assert_eq!(det.update(false), ButtonEdges::NONE);
        assert_eq!(det.update(true), ButtonEdges::PRESSED);
        assert_eq!(det.update(true), ButtonEdges::NONE);
        assert_eq!(det.update(false), ButtonEdges::RELEASED);
        assert_eq!(det.update(false), ButtonEdges::NONE);
    }

    #[test]
    fn test_edge_detector_level() {
        let mut det = EdgeDetector::new();
        assert!(!det.level());
        det.update(true);
        assert!(det.level());
        det.update(false);
        assert!(!det.level());
    }

    #[test]
    fn test_idle_sample_is_quiet() {
        let sample = InputSample::idle(1234);
        assert!(sample.is_quiet());
        assert_eq!(sample.encoder_pos, 1234);
    }

    #[test]
    fn test_touch_sample_makes_sample_active() {
        let mut sample = InputSample::idle(0);
        sample.touch = TouchSample::at(120);
        assert!(!sample.is_quiet());
        assert_eq!(sample.touch.x, 120);
    }
}
