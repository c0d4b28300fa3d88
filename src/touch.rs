//! Touch zone detection.
//!
//! Pure logic, no hardware dependencies. Maps a touch coordinate to one of
//! two logical zones and detects the begin edge that triggers zone actions.
//!
//! The panel is split down the middle: left half Escape, right half Shift.
//! Only the inactive-to-active transition fires; holding, or sliding from
//! one zone to the other while held, updates the reported zone (so the
//! display highlight follows the finger) but fires nothing. A fresh begin
//! after release is required to fire again.

use crate::sample::TouchSample;

/// Logical touch zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchZone {
    /// No touch, or touch outside the panel.
    None,
    /// Left half: sends Escape on tap.
    Escape,
    /// Right half: toggles the shift lock on tap.
    Shift,
}

impl TouchZone {
    /// Classify an x coordinate against the panel width.
    ///
    /// `0 <= x < w/2` is Escape, `w/2 <= x < w` is Shift, anything else
    /// (including coordinates off the panel) is None. Never fails.
    pub const fn classify(x: i32, width: u16) -> TouchZone {
        let w = width as i32;
        if x >= 0 && x < w / 2 {
            TouchZone::Escape
        } else if x >= w / 2 && x < w {
            TouchZone::Shift
        } else {
            TouchZone::None
        }
    }
}

/// A touch-begin edge that landed in an actionable zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneEdge {
    /// Begin in the Escape zone.
    Escape,
    /// Begin in the Shift zone.
    Shift,
}

/// Touch zone detector.
///
/// Stateless classification plus the previous-poll state needed for edge
/// detection. The reported zone is what rendering observes for the
/// pressed-state highlight.
#[derive(Clone, Copy, Debug)]
pub struct ZoneDetector {
    active: bool,
    zone: TouchZone,
}

impl ZoneDetector {
    /// Create a detector with no touch in progress.
    pub const fn new() -> Self {
        Self {
            active: false,
            zone: TouchZone::None,
        }
    }

    /// Feed this poll's touch reading.
    ///
    /// # Returns
    ///
    /// The zone edge, only on the poll where the touch begins inside an
    /// actionable zone. Touch end clears the reported zone and returns
    /// nothing.
    pub fn poll(&mut self, touch: TouchSample, width: u16) -> Option<ZoneEdge> {
        if !touch.active {
            self.active = false;
            self.zone = TouchZone::None;
            return None;
        }

        let zone = TouchZone::classify(touch.x, width);
        let began = !self.active;
        self.active = true;
        self.zone = zone;

        if !began {
            return None;
        }
        match zone {
            TouchZone::Escape => Some(ZoneEdge::Escape),
            TouchZone::Shift => Some(ZoneEdge::Shift),
            TouchZone::None => None,
        }
    }

    /// Zone currently under the finger, None when not touched.
    ///
    /// Read-only view for the rendering layer.
    pub const fn zone(&self) -> TouchZone {
        self.zone
    }

    /// Whether a touch is in progress.
    pub const fn is_touched(&self) -> bool {
        self.active
    }
}

impl Default for ZoneDetector {
    fn default() -> Self {
        Self::new()
    }
}
