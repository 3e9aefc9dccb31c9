//! Per-tick sampling of the encoder lines.

use super::{ButtonDebouncer, EncoderPolarity, InputEvent, InputLines, Line, QuadratureDecoder};

/// Polls the three lines once per tick and emits at most one event.
///
/// Never blocks and touches nothing but its own edge state, so it can be
/// called from a bare polling loop.
pub struct InputSampler<L> {
    lines: L,
    decoder: QuadratureDecoder,
    button: ButtonDebouncer,
}

impl<L: InputLines> InputSampler<L> {
    pub fn new(lines: L, polarity: EncoderPolarity, debounce_ms: u64) -> Self {
        Self {
            lines,
            decoder: QuadratureDecoder::new(polarity),
            button: ButtonDebouncer::new(debounce_ms),
        }
    }

    /// Sample all lines and translate them into an event.
    ///
    /// A rotation wins over a button edge seen in the same tick; the button
    /// state is then left untouched so the edge is evaluated on the next
    /// poll instead of being lost.
    pub fn poll(&mut self, now_ms: u64) -> Option<InputEvent> {
        let a = self.lines.read_line(Line::EncoderA);
        let b = self.lines.read_line(Line::EncoderB);
        // Active-low switch.
        let pressed = !self.lines.read_line(Line::Button);

        if let Some(direction) = self.decoder.update(a, b) {
            return Some(InputEvent::rotation(direction, pressed));
        }

        if self.button.update(pressed, now_ms) {
            return Some(InputEvent::PressDown);
        }

        None
    }

    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }
}
