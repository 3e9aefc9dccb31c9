//! Quadrature decoding by falling-edge detection on line A.
//!
//! One detent of the encoder produces one high→low transition on A. The
//! level of B at that instant gives the direction. Bounce on A that does
//! not complete a falling edge is ignored, so contact noise never needs a
//! separate filter.

use crate::params::Direction;

/// Which level of line B means clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderPolarity {
    ClockwiseWhenBHigh,
    ClockwiseWhenBLow,
}

impl EncoderPolarity {
    fn resolve(self, b: bool) -> Direction {
        let clockwise = match self {
            EncoderPolarity::ClockwiseWhenBHigh => b,
            EncoderPolarity::ClockwiseWhenBLow => !b,
        };
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

/// Edge state of the encoder.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureDecoder {
    previous_a: bool,
    polarity: EncoderPolarity,
}

impl QuadratureDecoder {
    /// `previous_a` starts low so a line that is already low at power-up
    /// does not count as a detent.
    pub const fn new(polarity: EncoderPolarity) -> Self {
        Self {
            previous_a: false,
            polarity,
        }
    }

    /// Feed one sample of both lines. Returns a direction exactly once per
    /// falling edge of A.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        let falling = self.previous_a && !a;
        self.previous_a = a;

        if falling {
            Some(self.polarity.resolve(b))
        } else {
            None
        }
    }
}
