//! [`InputLines`] on nRF52840 GPIO.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

use super::{InputLines, Line};

/// Encoder A/B and switch, all with internal pull-ups.
pub struct EncoderPins {
    a: Input<'static>,
    b: Input<'static>,
    switch: Input<'static>,
}

impl EncoderPins {
    pub fn new(a: AnyPin, b: AnyPin, switch: AnyPin) -> Self {
        Self {
            a: Input::new(a, Pull::Up),
            b: Input::new(b, Pull::Up),
            switch: Input::new(switch, Pull::Up),
        }
    }
}

impl InputLines for EncoderPins {
    fn read_line(&mut self, line: Line) -> bool {
        match line {
            Line::EncoderA => self.a.is_high(),
            Line::EncoderB => self.b.is_high(),
            Line::Button => self.switch.is_high(),
        }
    }
}
