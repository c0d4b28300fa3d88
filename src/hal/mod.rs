//! Hardware Abstraction Layer for RustDialKeypad.
//!
//! Thin wrappers around the M5Dial peripherals (encoder counter, FT3267
//! touch controller, front button, USB keyboard). Interpretation logic
//! stays in the core modules, HAL is just I/O.

pub mod ft3267;
pub mod gpio;
pub mod usb;

pub use ft3267::{Ft3267, Ft3267Config, Ft3267Error, FT3267_ADDR};
pub use usb::{PacingPolicy, UsbKeyboard, UsbKeyboardConfig};
