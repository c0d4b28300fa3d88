//! GPIO HAL for the encoder and the front button.

use crate::sample::{ButtonEdges, EdgeDetector};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio::{AnyInputPin, Input, PinDriver};

/// Rotary encoder pin configuration (quadrature A/B).
///
/// The counter itself runs in the PCNT peripheral; the core only ever
/// sees the absolute count.
pub struct EncoderPins {
    pub pin_a: i32,
    pub pin_b: i32,
}

impl Default for EncoderPins {
    fn default() -> Self {
        Self {
            pin_a: 40,
            pin_b: 41,
        }
    }
}

/// Front button pin configuration.
pub struct ButtonPin {
    pub pin: i32,
    pub active_low: bool,
}

impl Default for ButtonPin {
    fn default() -> Self {
        Self {
            pin: 42,
            active_low: true,
        }
    }
}

/// Button driver: samples the pin level, reports edges.
///
/// Edge derivation lives in the pure [`EdgeDetector`]; this wrapper only
/// knows which pin and which polarity.
#[cfg(target_os = "espidf")]
pub struct ButtonDriver<'d> {
    pin: PinDriver<'d, AnyInputPin, Input>,
    edges: EdgeDetector,
    active_low: bool,
}

#[cfg(target_os = "espidf")]
impl<'d> ButtonDriver<'d> {
    pub fn new(pin: PinDriver<'d, AnyInputPin, Input>, active_low: bool) -> Self {
        Self {
            pin,
            edges: EdgeDetector::new(),
            active_low,
        }
    }

    /// Sample the pin once, returning this poll's edges.
    pub fn sample(&mut self) -> ButtonEdges {
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        self.edges.update(level)
    }

    /// Current debounced level (true = pressed).
    pub fn is_pressed(&self) -> bool {
        self.edges.level()
    }
}

/// Host build: scripted button for loop-level testing.
#[cfg(not(target_os = "espidf"))]
pub struct ButtonDriver {
    edges: EdgeDetector,
    level: bool,
}

#[cfg(not(target_os = "espidf"))]
impl ButtonDriver {
    pub fn new() -> Self {
        Self {
            edges: EdgeDetector::new(),
            level: false,
        }
    }

    /// Set the simulated pin level.
    pub fn set_level(&mut self, pressed: bool) {
        self.level = pressed;
    }

    /// Sample the simulated level, returning this poll's edges.
    pub fn sample(&mut self) -> ButtonEdges {
        self.edges.update(self.level)
    }

    /// Current debounced level (true = pressed).
    pub fn is_pressed(&self) -> bool {
        self.edges.level()
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for ButtonDriver {
    fn default() -> Self {
        Self::new()
    }
}
