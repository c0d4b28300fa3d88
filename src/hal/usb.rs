//! USB HID keyboard adapter.
//!
//! Consumes intents, produces boot-keyboard report transactions: press
//! (modifiers + usage), pace, release, pace. Pacing is a policy parameter
//! of this adapter, not of the core — the interpretation logic never
//! sleeps.
//!
//! Failures are not surfaced to the core: a report the host missed is
//! gone, exactly like the hardware it replaces.

use crate::intent::Intent;
use crate::io::IntentSink;
use crate::keymap::{KeyChord, Keymap, StepKeyMode};

/// Delay inserted between key transitions so slow hosts keep up.
#[derive(Clone, Copy, Debug)]
pub struct PacingPolicy {
    pub inter_report_ms: u32,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self { inter_report_ms: 2 }
    }
}

/// USB keyboard adapter configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsbKeyboardConfig {
    pub step_mode: StepKeyMode,
    pub pacing: PacingPolicy,
}

/// Boot keyboard report: modifier byte, reserved byte, six key slots.
/// This device only ever presses one key at a time.
pub fn boot_report(modifiers: u8, usage: u8) -> [u8; 8] {
    [modifiers, 0, usage, 0, 0, 0, 0, 0]
}

/// An all-keys-up report.
pub fn release_report() -> [u8; 8] {
    [0; 8]
}

/// USB HID keyboard.
///
/// On host: maps and counts, sends nothing.
/// On device: submits boot-keyboard reports to the USB stack.
pub struct UsbKeyboard {
    keymap: Keymap,
    pacing: PacingPolicy,
    sent: u32,
}

impl UsbKeyboard {
    /// Create a keyboard adapter.
    pub fn new(config: UsbKeyboardConfig) -> Self {
        Self {
            keymap: Keymap::new(config.step_mode),
            pacing: config.pacing,
            sent: 0,
        }
    }

    /// Number of key transactions performed since boot.
    pub fn sent(&self) -> u32 {
        self.sent
    }

    /// Active pacing policy.
    pub fn pacing(&self) -> PacingPolicy {
        self.pacing
    }

    /// Perform one press/release transaction with pacing.
    fn tap(&mut self, chord: KeyChord) {
        self.submit(boot_report(chord.modifiers, chord.usage));
        self.pace();
        self.submit(release_report());
        self.pace();
        self.sent = self.sent.wrapping_add(1);
    }

    #[cfg(target_os = "espidf")]
    fn submit(&mut self, _report: [u8; 8]) {
        // TODO: hand the report to tud_hid_report once the espressif
        // tinyusb component is wired into the build
    }

    #[cfg(not(target_os = "espidf"))]
    fn submit(&mut self, _report: [u8; 8]) {}

    #[cfg(target_os = "espidf")]
    fn pace(&self) {
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(self.pacing.inter_report_ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn pace(&self) {}
}

impl IntentSink for UsbKeyboard {
    fn send(&mut self, intent: Intent) {
        // ToggleShiftLock has no chord; nothing goes out
        if let Some(chord) = self.keymap.chord(intent) {
            self.tap(chord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentKind;
    use crate::keymap::{usage, MOD_LEFT_SHIFT};

    #[test]
    fn test_boot_report_layout() {
        let report = boot_report(MOD_LEFT_SHIFT, usage::ENTER);
        assert_eq!(report, [0x02, 0, 0x28, 0, 0, 0, 0, 0]);
        assert_eq!(release_report(), [0; 8]);
    }

    #[test]
    fn test_send_counts_transactions() {
        let mut kb = UsbKeyboard::new(UsbKeyboardConfig::default());

        kb.send(Intent::plain(IntentKind::Enter));
        kb.send(Intent::plain(IntentKind::Escape));
        assert_eq!(kb.sent(), 2);

        // Toggle marker sends no key
        kb.send(Intent::plain(IntentKind::ToggleShiftLock));
        assert_eq!(kb.sent(), 2);
    }
}
