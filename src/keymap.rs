//! Intent to USB HID chord mapping.
//!
//! Pure logic, no hardware dependencies. The transport adapter asks here
//! which key (and which modifier byte) an intent becomes; what it does with
//! the answer — report framing, pacing — is its own business.
//!
//! Usage IDs are from the HID Usage Tables, Keyboard/Keypad page (0x07).

/// HID Keyboard/Keypad page usage IDs used by this device.
pub mod usage {
    pub const KEY_A: u8 = 0x04;
    pub const KEY_D: u8 = 0x07;
    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const DELETE_FORWARD: u8 = 0x4C;
    pub const ARROW_RIGHT: u8 = 0x4F;
    pub const ARROW_LEFT: u8 = 0x50;
}

/// Left Shift bit in the HID report modifier byte.
pub const MOD_LEFT_SHIFT: u8 = 0x02;

/// What the rotary steps type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKeyMode {
    /// Steps send Left-Arrow / Right-Arrow.
    Arrows,
    /// Steps send 'a' / 'd' (legacy binding; shift lock makes them 'A'/'D').
    Letters,
}

impl Default for StepKeyMode {
    fn default() -> Self {
        StepKeyMode::Arrows
    }
}

/// One key transaction: press this usage with these modifiers, release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub usage: u8,
    pub modifiers: u8,
}

impl KeyChord {
    /// A chord without modifiers.
    pub const fn plain(usage: u8) -> Self {
        Self { usage, modifiers: 0 }
    }

    /// A chord with Left Shift held.
    pub const fn shifted(usage: u8) -> Self {
        Self {
            usage,
            modifiers: MOD_LEFT_SHIFT,
        }
    }
}

use crate::intent::{Intent, IntentKind};

/// Intent to chord mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keymap {
    step_mode: StepKeyMode,
}

impl Keymap {
    /// Create a keymap with the given step binding.
    pub const fn new(step_mode: StepKeyMode) -> Self {
        Self { step_mode }
    }

    /// Active step binding.
    pub const fn step_mode(&self) -> StepKeyMode {
        self.step_mode
    }

    /// Map an intent to the chord to send.
    ///
    /// `ToggleShiftLock` maps to `None`: it exists for the display label
    /// and sends no key.
    pub fn chord(&self, intent: Intent) -> Option<KeyChord> {
        let usage = match intent.kind {
            IntentKind::MoveStepLeft => match self.step_mode {
                StepKeyMode::Arrows => usage::ARROW_LEFT,
                StepKeyMode::Letters => usage::KEY_A,
            },
            IntentKind::MoveStepRight => match self.step_mode {
                StepKeyMode::Arrows => usage::ARROW_RIGHT,
                StepKeyMode::Letters => usage::KEY_D,
            },
            IntentKind::Enter => usage::ENTER,
            IntentKind::Escape => usage::ESCAPE,
            IntentKind::Delete => usage::DELETE_FORWARD,
            IntentKind::ToggleShiftLock => return None,
        };

        let modifiers = if intent.shift { MOD_LEFT_SHIFT } else { 0 };
        Some(KeyChord { usage, modifiers })
    }
}
