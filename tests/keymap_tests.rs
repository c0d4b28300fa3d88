//! Intent-to-chord mapping tests

use rust_dial_keypad::intent::{Intent, IntentKind};
use rust_dial_keypad::keymap::{usage, KeyChord, Keymap, StepKeyMode, MOD_LEFT_SHIFT};

#[test]
fn test_default_step_mode_is_arrows() {
    let map = Keymap::default();
    assert_eq!(map.step_mode(), StepKeyMode::Arrows);

    assert_eq!(
        map.chord(Intent::plain(IntentKind::MoveStepLeft)),
        Some(KeyChord::plain(usage::ARROW_LEFT))
    );
    assert_eq!(
        map.chord(Intent::plain(IntentKind::MoveStepRight)),
        Some(KeyChord::plain(usage::ARROW_RIGHT))
    );
}

#[test]
fn test_letters_mode_sends_a_and_d() {
    let map = Keymap::new(StepKeyMode::Letters);

    assert_eq!(
        map.chord(Intent::plain(IntentKind::MoveStepLeft)),
        Some(KeyChord::plain(usage::KEY_A))
    );
    assert_eq!(
        map.chord(Intent::plain(IntentKind::MoveStepRight)),
        Some(KeyChord::plain(usage::KEY_D))
    );
}

#[test]
fn test_shift_flag_becomes_modifier_byte() {
    let map = Keymap::new(StepKeyMode::Letters);

    // Shift-locked 'a' is the chord for 'A'
    let chord = map
        .chord(Intent::with_shift(IntentKind::MoveStepLeft))
        .unwrap();
    assert_eq!(chord.usage, usage::KEY_A);
    assert_eq!(chord.modifiers, MOD_LEFT_SHIFT);

    let enter = map.chord(Intent::with_shift(IntentKind::Enter)).unwrap();
    assert_eq!(enter.usage, usage::ENTER);
    assert_eq!(enter.modifiers, MOD_LEFT_SHIFT);
}

#[test]
fn test_editing_keys() {
    let map = Keymap::default();

    assert_eq!(
        map.chord(Intent::plain(IntentKind::Escape)),
        Some(KeyChord::plain(usage::ESCAPE))
    );
    assert_eq!(
        map.chord(Intent::plain(IntentKind::Delete)),
        Some(KeyChord::plain(usage::DELETE_FORWARD))
    );
}

#[test]
fn test_toggle_marker_is_silent() {
    let map = Keymap::default();
    assert_eq!(map.chord(Intent::plain(IntentKind::ToggleShiftLock)), None);
}
