//! Screen layout for the focused parameter.
//!
//! ```text
//! row 0  > Brightness   3/5     header, inverse while armed
//! row 1
//! row 2  50%                    value, or up to three name lines
//! ```

use core::fmt::Write;

use heapless::String;

use super::layout::{format_percent, split_name, strip_advisory_marker, truncated, TextLine};
use super::menu::MenuFocus;
use super::{DisplaySink, Font, NameLookup};
use crate::params::{ParameterKind, ValueRegistry, PARAMETER_COUNT};

/// Marker drawn in front of the header while the focused parameter is armed.
pub const ARMED_MARKER: &str = "> ";

/// First row used for the value.
const VALUE_ROW: u8 = 2;

/// Everything a frame depends on. Names are static per index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frame {
    selected: ParameterKind,
    armed: bool,
    value: u16,
}

/// Draws [`MenuFocus`] and the live values onto a [`DisplaySink`].
pub struct DisplayRenderer {
    columns: u8,
    rows: u8,
    last: Option<Frame>,
    awake: Option<bool>,
}

impl DisplayRenderer {
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            last: None,
            awake: None,
        }
    }

    /// Forget the last frame so the next [`render`](Self::render) draws.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Switch display power. Only a change reaches the sink; waking forces
    /// the next frame to be redrawn.
    pub fn set_awake<D: DisplaySink>(&mut self, sink: &mut D, awake: bool) {
        if self.awake == Some(awake) {
            return;
        }
        sink.set_power_save(!awake);
        self.awake = Some(awake);
        if awake {
            self.invalidate();
        }
    }

    pub fn is_awake(&self) -> bool {
        self.awake.unwrap_or(false)
    }

    /// Draw the focused parameter. Returns `true` if the sink was touched.
    ///
    /// Nothing is drawn while the display sleeps or when the frame is
    /// identical to the previous one.
    pub fn render<D: DisplaySink, N: NameLookup>(
        &mut self,
        sink: &mut D,
        names: &N,
        focus: MenuFocus,
        registry: &ValueRegistry,
    ) -> bool {
        if !self.is_awake() {
            return false;
        }

        let frame = Frame {
            selected: focus.selected,
            armed: focus.armed,
            value: registry.value(focus.selected),
        };
        if self.last == Some(frame) {
            return false;
        }

        sink.clear();
        self.draw_header(sink, frame);
        self.draw_value(sink, names, frame);
        sink.flush();

        self.last = Some(frame);
        true
    }

    fn draw_header<D: DisplaySink>(&self, sink: &mut D, frame: Frame) {
        let width = self.columns as usize;

        let mut position: String<8> = String::new();
        let _ = write!(
            position,
            "{}/{}",
            frame.selected.index() + 1,
            PARAMETER_COUNT
        );
        let position_col = width.saturating_sub(position.len());

        let mut header = TextLine::new();
        if frame.armed {
            let _ = header.push_str(ARMED_MARKER);
        }
        let _ = header.push_str(frame.selected.label());
        let header = truncated(&header, position_col.saturating_sub(1));

        sink.set_font(if frame.armed {
            Font::Inverse
        } else {
            Font::Regular
        });
        sink.draw_text_at(0, 0, &header);
        sink.set_font(Font::Regular);
        sink.draw_text_at(position_col as u8, 0, &position);
    }

    fn draw_value<D: DisplaySink, N: NameLookup>(&self, sink: &mut D, names: &N, frame: Frame) {
        let width = self.columns as usize;

        let Some(catalog) = frame.selected.catalog() else {
            // Quantities are stored as u8.
            sink.draw_text_at(0, VALUE_ROW, &format_percent(frame.value as u8));
            return;
        };

        match names.name_of(catalog, frame.value) {
            Some(name) => {
                let free_rows = self.rows.saturating_sub(VALUE_ROW);
                let lines = split_name(strip_advisory_marker(name), width);
                for (row, line) in (VALUE_ROW..).zip(lines.iter().take(free_rows as usize)) {
                    sink.draw_text_at(0, row, line);
                }
            }
            None => {
                let mut fallback: String<8> = String::new();
                let _ = write!(fallback, "#{}", frame.value);
                sink.draw_text_at(0, VALUE_ROW, &fallback);
            }
        }
    }
}
