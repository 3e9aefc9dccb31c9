//! SSD1306 OLED display wrapper.
//!
//! The 128×64 panel is addressed as a 16×8 grid of 8×8 px character cells.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::{DisplaySink, Font};
use crate::config::DISPLAY_I2C_ADDRESS;
use crate::error::Error;

/// Side of one character cell in pixels.
const CELL_PX: u32 = 8;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// [`DisplaySink`] on an SSD1306.
///
/// Sink calls cannot fail; the first bus error is kept in [`fault`](Self::fault).
pub struct OledDisplay<I2C> {
    display: Display<I2C>,
    font: Font,
    fault: Option<Error>,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 display and clear the screen.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        let mut oled = Self {
            display,
            font: Font::Regular,
            fault: None,
        };
        let init = oled.display.init();
        oled.check(init);
        oled.display.clear_buffer();
        let flushed = oled.display.flush();
        oled.check(flushed);
        oled
    }

    /// First failed bus transaction since the last call, if any.
    pub fn fault(&mut self) -> Option<Error> {
        self.fault.take()
    }

    fn check<E>(&mut self, result: Result<(), E>) {
        if result.is_err() && self.fault.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display: I2C transaction failed");
            self.fault = Some(Error::Display);
        }
    }
}

fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(color)
        .build()
}

impl<I2C> DisplaySink for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_text_at(&mut self, col: u8, row: u8, text: &str) {
        let origin = Point::new((col as u32 * CELL_PX) as i32, (row as u32 * CELL_PX) as i32);

        let color = match self.font {
            Font::Regular => BinaryColor::On,
            Font::Inverse => {
                let cells = text.chars().count() as u32;
                let _ = Rectangle::new(origin, Size::new(cells * CELL_PX, CELL_PX))
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(&mut self.display);
                BinaryColor::Off
            }
        };

        // Glyphs are 5 px wide; place each character in its own cell.
        for (i, c) in text.chars().enumerate() {
            let mut glyph = [0u8; 4];
            let position = origin + Point::new((i as u32 * CELL_PX) as i32, 0);
            let _ = Text::with_baseline(
                c.encode_utf8(&mut glyph),
                position,
                text_style(color),
                Baseline::Top,
            )
            .draw(&mut self.display);
        }
    }

    fn set_power_save(&mut self, enabled: bool) {
        let result = self.display.set_display_on(!enabled);
        self.check(result);
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn flush(&mut self) {
        let result = self.display.flush();
        self.check(result);
    }
}
