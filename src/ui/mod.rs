//! User interface subsystem - OLED display + rotary menu.
//!
//! The [`MenuController`](menu::MenuController) maintains a state machine
//! that reacts to encoder events, and the
//! [`DisplayRenderer`](render::DisplayRenderer) draws the focused
//! parameter on the display.
//!
//! ## Components
//!
//! - **Menu**: focus / armed state machine with an inactivity sleep overlay
//! - **Layout**: pure text formatting (names, percentages)
//! - **Render**: frame layout on the character grid, redraw suppression
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded builds only)

#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod layout;
pub mod menu;
pub mod render;


use crate::params::Catalog;

/// Text styles the display can draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    Regular,
    /// Dark text on a lit background, used for the armed header.
    Inverse,
}

/// Character-grid display driver.
///
/// Columns and rows address character cells. Drawing goes to a frame that
/// becomes visible on [`flush`](DisplaySink::flush).
pub trait DisplaySink {
    fn clear(&mut self);
    fn draw_text_at(&mut self, col: u8, row: u8, text: &str);
    fn set_power_save(&mut self, enabled: bool);
    fn set_font(&mut self, font: Font);
    fn flush(&mut self) {}
}

/// Display names of effects and palettes, owned by the LED engine.
///
/// Names may start with the `"* "` advisory marker.
pub trait NameLookup {
    fn name_of(&self, catalog: Catalog, index: u16) -> Option<&str>;
}

/// Name tables indexed by effect/palette number.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticNames {
    pub effects: &'static [&'static str],
    pub palettes: &'static [&'static str],
}

impl StaticNames {
    pub const fn new(effects: &'static [&'static str], palettes: &'static [&'static str]) -> Self {
        Self { effects, palettes }
    }

    /// No names; every index renders as `#<index>`.
    pub const fn empty() -> Self {
        Self::new(&[], &[])
    }
}

impl NameLookup for StaticNames {
    fn name_of(&self, catalog: Catalog, index: u16) -> Option<&str> {
        let table = match catalog {
            Catalog::Effects => self.effects,
            Catalog::Palettes => self.palettes,
        };
        table.get(index as usize).copied()
    }
}
