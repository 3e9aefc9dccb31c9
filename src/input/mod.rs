//! Input subsystem - quadrature encoder + integrated push-button.
//!
//! The [`InputSampler`] is polled once per tick, reads the three lines
//! through an [`InputLines`] capability and turns raw levels into
//! [`InputEvent`]s for the menu.
//!
//! ## Components
//!
//! - **Encoder**: falling-edge detection on line A, direction from line B
//! - **Button**: edge-triggered press with a debounce window (active-low)
//! - **Pins**: GPIO implementation of [`InputLines`] (embedded builds only)

pub mod button;
pub mod encoder;
#[cfg(feature = "embedded")]
pub mod pins;
pub mod sampler;

pub use button::ButtonDebouncer;
pub use encoder::{EncoderPolarity, QuadratureDecoder};
pub use sampler::InputSampler;

use crate::params::Direction;

/// The three digital lines of the encoder module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Encoder output A (CLK).
    EncoderA,
    /// Encoder output B (DT).
    EncoderB,
    /// Integrated push-button (SW), low while pressed.
    Button,
}

/// Read access to the raw input lines.
///
/// Implemented by the GPIO pins on target and by scripted doubles in tests.
/// `true` means the line is at the high level.
pub trait InputLines {
    fn read_line(&mut self, line: Line) -> bool;
}

/// Discrete user intents produced by the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    RotateCw,
    RotateCcw,
    RotateCwWhilePressed,
    RotateCcwWhilePressed,
    PressDown,
}

impl InputEvent {
    /// Build the rotate event for `direction`.
    pub fn rotation(direction: Direction, pressed: bool) -> Self {
        match (direction, pressed) {
            (Direction::Clockwise, false) => InputEvent::RotateCw,
            (Direction::CounterClockwise, false) => InputEvent::RotateCcw,
            (Direction::Clockwise, true) => InputEvent::RotateCwWhilePressed,
            (Direction::CounterClockwise, true) => InputEvent::RotateCcwWhilePressed,
        }
    }

    /// Rotation direction, `None` for button events.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::RotateCw | InputEvent::RotateCwWhilePressed => Some(Direction::Clockwise),
            InputEvent::RotateCcw | InputEvent::RotateCcwWhilePressed => {
                Some(Direction::CounterClockwise)
            }
            InputEvent::PressDown => None,
        }
    }

    /// `true` for the rotate-while-pressed gestures.
    pub fn is_pressed_rotation(self) -> bool {
        matches!(
            self,
            InputEvent::RotateCwWhilePressed | InputEvent::RotateCcwWhilePressed
        )
    }
}
