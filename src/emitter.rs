//! Intent emitter: per-poll composition of the input detectors.
//!
//! Owns all interpretation state — encoder tracker, zone detector, button
//! classifier, shift latch — as one explicit struct held by the polling
//! loop. No globals; everything the detectors share travels through here
//! by exclusive reference for the duration of one poll.
//!
//! Emission order within a poll is encoder steps, then touch, then button.
//! The transport processes intents strictly in that order, and any one of
//! them may consume the shift latch on its way out.

use crate::button::{ButtonClassifier, ButtonEvent};
use crate::config::InputConfig;
use crate::encoder::EncoderTracker;
use crate::intent::{Intent, IntentBatch, IntentKind};
use crate::sample::InputSample;
use crate::shift::ShiftLatch;
use crate::touch::{TouchZone, ZoneDetector, ZoneEdge};

/// Batch slots held back from the encoder so the touch and button channels
/// can always append their single intent each.
const RESERVED_SLOTS: usize = 2;

/// What the rendering layer observes, once per poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    /// Zone currently under the finger (pressed-state highlight).
    pub zone: TouchZone,
    /// Shift lock flag ("Shift" vs "Shift Lock" label).
    pub shift_lock: bool,
}

/// The input interpretation core.
///
/// # Example
///
/// ```
/// use rust_dial_keypad::config::InputConfig;
/// use rust_dial_keypad::emitter::IntentEmitter;
/// use rust_dial_keypad::intent::IntentBatch;
/// use rust_dial_keypad::sample::InputSample;
///
/// let mut emitter = IntentEmitter::new(InputConfig::default());
/// emitter.sync_encoder(0);
///
/// let mut batch = IntentBatch::new();
/// let mut sample = InputSample::idle(0);
/// sample.encoder_pos = 4; // one detent to the right
///
/// emitter.poll(0, &sample, &mut batch);
/// assert_eq!(batch.len(), 1);
/// ```
pub struct IntentEmitter {
    config: InputConfig,
    encoder: EncoderTracker,
    zones: ZoneDetector,
    button: ButtonClassifier,
    shift: ShiftLatch,
}

impl IntentEmitter {
    /// Create an emitter with all detectors idle.
    pub fn new(config: InputConfig) -> Self {
        Self {
            encoder: EncoderTracker::new(&config),
            zones: ZoneDetector::new(),
            button: ButtonClassifier::new(&config),
            shift: ShiftLatch::new(),
            config,
        }
    }

    /// Re-base the encoder tracker on the first hardware reading.
    ///
    /// Call once at startup so the power-on count does not replay as a
    /// burst of steps.
    pub fn sync_encoder(&mut self, pos: i64) {
        self.encoder.sync(pos);
    }

    /// Run one poll iteration.
    ///
    /// Appends this poll's intents to `out` in emission order: encoder
    /// steps, then the touch edge, then the button event. With unchanged
    /// raw input nothing is appended.
    pub fn poll(&mut self, now_ms: u32, sample: &InputSample, out: &mut IntentBatch) {
        self.poll_encoder(sample, out);
        self.poll_touch(sample, out);
        self.poll_button(now_ms, sample, out);
    }

    fn poll_encoder(&mut self, sample: &InputSample, out: &mut IntentBatch) {
        // Hold back slots for the touch and button channels; capped-off
        // steps stay pending in the tracker for the next poll.
        let room = out.remaining().saturating_sub(RESERVED_SLOTS);
        let steps = self.encoder.take_steps(sample.encoder_pos, room);

        let kind = if steps > 0 {
            IntentKind::MoveStepRight
        } else {
            IntentKind::MoveStepLeft
        };

        // The latch self-clears after one intent, so only the first step
        // of a batch can come out shifted.
        for _ in 0..steps.unsigned_abs() {
            let (intent, _) = self.shift.apply(Intent::plain(kind));
            out.push(intent);
        }
    }

    fn poll_touch(&mut self, sample: &InputSample, out: &mut IntentBatch) {
        match self.zones.poll(sample.touch, self.config.screen_width) {
            Some(ZoneEdge::Escape) => {
                // Escape is never modifier-sensitive; it bypasses the latch.
                out.push(Intent::plain(IntentKind::Escape));
            }
            Some(ZoneEdge::Shift) => {
                self.shift.toggle();
                out.push(Intent::plain(IntentKind::ToggleShiftLock));
            }
            None => {}
        }
    }

    fn poll_button(&mut self, now_ms: u32, sample: &InputSample, out: &mut IntentBatch) {
        match self.button.tick(now_ms, sample.button) {
            Some(ButtonEvent::ShortClick) => {
                let (intent, _) = self.shift.apply(Intent::plain(IntentKind::Enter));
                out.push(intent);
            }
            Some(ButtonEvent::LongPressStart) | Some(ButtonEvent::LongPressRepeat) => {
                out.push(Intent::plain(IntentKind::Delete));
            }
            None => {}
        }
    }

    /// Read-only snapshot for the rendering layer.
    pub fn view(&self) -> PanelView {
        PanelView {
            zone: self.zones.zone(),
            shift_lock: self.shift.is_active(),
        }
    }

    /// Whether the shift lock is armed.
    pub fn shift_locked(&self) -> bool {
        self.shift.is_active()
    }

    /// Zone currently under the finger.
    pub fn zone(&self) -> TouchZone {
        self.zones.zone()
    }

    /// Active configuration.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ButtonEdges, TouchSample};

    fn make_emitter() -> IntentEmitter {
        IntentEmitter::new(InputConfig::default())
    }

    #[test]
    fn test_idle_poll_emits_nothing() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        for t in 0..10 {
            emitter.poll(t * 10, &InputSample::idle(0), &mut batch);
            assert!(batch.is_empty());
        }
    }

    #[test]
    fn test_encoder_steps_become_move_intents() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        let mut sample = InputSample::idle(8);
        emitter.poll(0, &sample, &mut batch);
        assert_eq!(batch.len(), 2);
        assert!(batch
            .iter()
            .all(|i| i.kind == IntentKind::MoveStepRight && !i.shift));

        batch.clear();
        sample.encoder_pos = 0;
        emitter.poll(10, &sample, &mut batch);
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|i| i.kind == IntentKind::MoveStepLeft));
    }

    #[test]
    fn test_shift_affects_only_first_step_of_batch() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        // Tap the Shift zone, then release
        let mut sample = InputSample::idle(0);
        sample.touch = TouchSample::at(200);
        emitter.poll(0, &sample, &mut batch);
        batch.clear();
        sample.touch = TouchSample::INACTIVE;
        emitter.poll(10, &sample, &mut batch);
        assert!(batch.is_empty());

        // Three steps in one poll: only the first is shifted
        sample.encoder_pos = 12;
        emitter.poll(20, &sample, &mut batch);
        assert_eq!(batch.len(), 3);
        assert!(batch.as_slice()[0].shift);
        assert!(!batch.as_slice()[1].shift);
        assert!(!batch.as_slice()[2].shift);
        assert!(!emitter.shift_locked());
    }

    #[test]
    fn test_emission_order_encoder_touch_button() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        let mut sample = InputSample::idle(0);
        sample.encoder_pos = 4;
        sample.touch = TouchSample::at(10);
        sample.button = ButtonEdges::PRESSED;
        emitter.poll(0, &sample, &mut batch);

        // Press alone emits nothing yet; release completes the click
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.as_slice()[0].kind, IntentKind::MoveStepRight);
        assert_eq!(batch.as_slice()[1].kind, IntentKind::Escape);

        batch.clear();
        sample.encoder_pos = 8;
        sample.touch = TouchSample::INACTIVE;
        sample.button = ButtonEdges::RELEASED;
        emitter.poll(100, &sample, &mut batch);

        assert_eq!(batch.as_slice()[0].kind, IntentKind::MoveStepRight);
        assert_eq!(batch.as_slice()[1].kind, IntentKind::Enter);
    }

    #[test]
    fn test_escape_is_never_shifted() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        // Arm the lock
        let mut sample = InputSample::idle(0);
        sample.touch = TouchSample::at(200);
        emitter.poll(0, &sample, &mut batch);
        sample.touch = TouchSample::INACTIVE;
        emitter.poll(10, &sample, &mut batch);
        batch.clear();

        // Tap Escape: goes out plain, lock stays armed
        sample.touch = TouchSample::at(10);
        emitter.poll(20, &sample, &mut batch);
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.as_slice()[0],
            Intent::plain(IntentKind::Escape)
        );
        assert!(emitter.shift_locked());
    }

    #[test]
    fn test_view_tracks_zone_and_lock() {
        let mut emitter = make_emitter();
        let mut batch = IntentBatch::new();

        assert_eq!(
            emitter.view(),
            PanelView {
                zone: TouchZone::None,
                shift_lock: false
            }
        );

        let mut sample = InputSample::idle(0);
        sample.touch = TouchSample::at(200);
        emitter.poll(0, &sample, &mut batch);

        assert_eq!(
            emitter.view(),
            PanelView {
                zone: TouchZone::Shift,
                shift_lock: true
            }
        );
    }
}
