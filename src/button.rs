//! Button press classifier finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes press/release edges and
//! the monotonic millisecond clock, discriminates short click from
//! hold-to-repeat. Fully testable on host.
//!
//! A single button has to carry two actions: a short click is Enter, a hold
//! of three seconds starts repeating Delete every half second until
//! release. Thresholds are measured against the clock, not the poll count,
//! so loop speed does not change behavior.

use crate::config::InputConfig;
use crate::sample::ButtonEdges;

/// FSM state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Pressed,
    LongPressActive,
}

/// What the classifier saw this poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Released before the long-press threshold.
    ShortClick,
    /// Held past the threshold; repeat mode entered.
    LongPressStart,
    /// Another repeat interval elapsed while still held.
    LongPressRepeat,
}

/// Button press classifier.
///
/// At most one event per poll. The long-press threshold check and the
/// short-click release check are mutually exclusive: once repeat mode is
/// entered, a release only stops the repeats.
#[derive(Clone, Copy, Debug)]
pub struct ButtonClassifier {
    long_press_ms: u32,
    repeat_ms: u32,

    state: State,
    press_start_ms: Option<u32>,
    last_repeat_ms: u32,
}

impl ButtonClassifier {
    /// Create a classifier in the idle state.
    pub fn new(config: &InputConfig) -> Self {
        Self {
            long_press_ms: config.long_press_ms,
            repeat_ms: config.repeat_ms,
            state: State::Idle,
            press_start_ms: None,
            last_repeat_ms: 0,
        }
    }

    /// Tick the FSM with this poll's edges.
    ///
    /// # Arguments
    ///
    /// * `now_ms` - Monotonic millisecond counter (wrapping is fine)
    /// * `edges` - Press/release edges seen since the previous poll
    ///
    /// # Returns
    ///
    /// At most one event. Interval math uses `wrapping_sub`, so counter
    /// wrap after ~49 days does not corrupt held durations.
    pub fn tick(&mut self, now_ms: u32, edges: ButtonEdges) -> Option<ButtonEvent> {
        match self.state {
            State::Idle => {
                if edges.pressed() {
                    if edges.released() {
                        // Tap shorter than one poll: both edges arrived
                        // together, hold duration is effectively zero
                        return Some(ButtonEvent::ShortClick);
                    }
                    self.state = State::Pressed;
                    self.press_start_ms = Some(now_ms);
                }
                None
            }

            State::Pressed => {
                // Missing press timestamp: treat the hold as zero-length
                let held_ms = self
                    .press_start_ms
                    .map(|start| now_ms.wrapping_sub(start))
                    .unwrap_or(0);

                if held_ms >= self.long_press_ms {
                    // Threshold wins over a same-poll release: the Delete
                    // fires either way, the release just ends repeat mode.
                    if edges.released() {
                        self.state = State::Idle;
                        self.press_start_ms = None;
                    } else {
                        self.state = State::LongPressActive;
                        self.last_repeat_ms = now_ms;
                    }
                    Some(ButtonEvent::LongPressStart)
                } else if edges.released() {
                    self.state = State::Idle;
                    self.press_start_ms = None;
                    Some(ButtonEvent::ShortClick)
                } else {
                    None
                }
            }

            State::LongPressActive => {
                if edges.released() {
                    self.state = State::Idle;
                    self.press_start_ms = None;
                    return None;
                }
                if now_ms.wrapping_sub(self.last_repeat_ms) >= self.repeat_ms {
                    self.last_repeat_ms = now_ms;
                    Some(ButtonEvent::LongPressRepeat)
                } else {
                    None
                }
            }
        }
    }

    /// Whether repeat-Delete mode is active.
    pub const fn is_repeating(&self) -> bool {
        matches!(self.state, State::LongPressActive)
    }

    /// Reset to idle, dropping any press in progress.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.press_start_ms = None;
        self.last_repeat_ms = 0;
    }
}
