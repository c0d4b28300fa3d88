//! RustDialKeypad - Main entry point
//!
//! Single-threaded polling loop:
//! 1. Read encoder, touch and button once
//! 2. Run the intent emitter
//! 3. Forward the batch to the USB keyboard
//! 4. Drain the log ring, yield one tick

#![no_std]
#![no_main]

use esp_idf_svc::sys as esp_idf_sys;

use rust_dial_keypad::{
    config::InputConfig,
    emitter::IntentEmitter,
    hal::usb::{UsbKeyboard, UsbKeyboardConfig},
    intent::{IntentBatch, IntentKind},
    io::IntentSink,
    logging::LogRing,
    sample::InputSample,
};

// Static allocation: the log ring is shared between the polling loop
// (producer) and the drain (consumer).
static LOG_RING: LogRing = LogRing::new();

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    // TODO: bring up peripherals
    // - PCNT unit on the encoder A/B pins (hal::gpio::EncoderPins)
    // - I2C bus + FT3267 init (hal::ft3267)
    // - Front button PinDriver (hal::gpio::ButtonDriver)
    // - TinyUSB HID keyboard

    let mut emitter = IntentEmitter::new(InputConfig::default());
    let mut keyboard = UsbKeyboard::new(UsbKeyboardConfig::default());
    let mut batch = IntentBatch::new();

    // First reading re-bases the tracker so the power-on count does not
    // replay as a burst of steps
    emitter.sync_encoder(read_inputs().encoder_pos);

    rust_dial_keypad::dial_info!(LOG_RING, timestamp_ms(), "dial keypad ready");

    loop {
        let now_ms = timestamp_ms();

        // 1. One hardware pass
        let sample = read_inputs();

        // 2. Interpret
        batch.clear();
        emitter.poll(now_ms, &sample, &mut batch);

        // 3. Transport, strictly in emission order
        for intent in &batch {
            keyboard.send(*intent);

            if intent.kind == IntentKind::ToggleShiftLock {
                rust_dial_keypad::dial_info!(
                    LOG_RING,
                    now_ms,
                    "shift lock {}",
                    if emitter.shift_locked() { "on" } else { "off" }
                );
            }
        }

        // Rendering observes emitter.view() here: zone highlight and the
        // Shift/Shift Lock label. Display driver not wired yet.
        let _ = emitter.view();

        // 4. Drain logs, yield
        drain_logs();
        unsafe {
            esp_idf_sys::vTaskDelay(1);
        }
    }
}

// --- Placeholder functions (to be implemented with real HAL) ---

fn timestamp_ms() -> u32 {
    let us = unsafe { esp_idf_sys::esp_timer_get_time() };
    (us / 1000) as u32
}

fn read_inputs() -> InputSample {
    // TODO: PCNT count, ft3267.read_touch(), button.sample()
    InputSample::idle(0)
}

fn drain_logs() {
    // TODO: route through uart_logger::drain_to_uart once the TX driver
    // is brought up alongside the other peripherals
    while LOG_RING.drain().is_some() {}
}
