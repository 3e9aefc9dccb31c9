//! Adjustable LED parameters and their value domains.
//!
//! Five parameters are edited from the knob:
//!
//! ```text
//! Effect     IndexDomain    0..118, banned entries skipped, wraps to 1
//! Palette    IndexDomain    0..71,  banned entries skipped, wraps to 6
//! Brightness QuantityDomain 0..=255, step 5, clamped
//! Speed      QuantityDomain 0..=255, step 5, clamped
//! Intensity  QuantityDomain 0..=255, step 5, clamped
//! ```
//!
//! [`ValueRegistry`] is the only owner of the live values; every change
//! goes through [`ValueRegistry::adjust`], which also forwards the change
//! to the [`LedEngine`](crate::led::LedEngine).

mod domain;
mod registry;

#[cfg(test)]
mod tests;

pub use domain::{IndexDomain, QuantityDomain};
pub use registry::{ChangeResult, ValueRegistry};

use crate::ui::input_logic::{select_next, select_prev};

/// Number of parameters reachable from the menu.
pub const PARAMETER_COUNT: usize = 5;

/// Rotation direction of one encoder detent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `+1` for clockwise, `-1` otherwise.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// The five adjustable parameters, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterKind {
    Effect,
    Palette,
    Brightness,
    Speed,
    Intensity,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; PARAMETER_COUNT] = [
        ParameterKind::Effect,
        ParameterKind::Palette,
        ParameterKind::Brightness,
        ParameterKind::Speed,
        ParameterKind::Intensity,
    ];

    /// Position in menu order (0-based).
    pub fn index(self) -> usize {
        match self {
            ParameterKind::Effect => 0,
            ParameterKind::Palette => 1,
            ParameterKind::Brightness => 2,
            ParameterKind::Speed => 3,
            ParameterKind::Intensity => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[select_next(self.index(), PARAMETER_COUNT)]
    }

    pub fn prev(self) -> Self {
        Self::ALL[select_prev(self.index(), PARAMETER_COUNT)]
    }

    /// Step focus one entry in `direction`, wrapping around.
    pub fn cycle(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => self.next(),
            Direction::CounterClockwise => self.prev(),
        }
    }

    /// Header text shown on the display.
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::Effect => "Effect",
            ParameterKind::Palette => "Palette",
            ParameterKind::Brightness => "Brightness",
            ParameterKind::Speed => "Speed",
            ParameterKind::Intensity => "Intensity",
        }
    }

    /// Name catalog backing this parameter, if it is an index.
    pub fn catalog(self) -> Option<Catalog> {
        match self {
            ParameterKind::Effect => Some(Catalog::Effects),
            ParameterKind::Palette => Some(Catalog::Palettes),
            _ => None,
        }
    }
}

/// Named catalogs of the LED engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Catalog {
    Effects,
    Palettes,
}

/// Static description of an index catalog, turned into an [`IndexDomain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of entries; valid indexes are `0..count`.
    pub count: u16,
    /// Index used after stepping past the last entry.
    pub wrap_start: u16,
    /// Entries that are skipped while scrolling.
    pub banned: &'static [u16],
}

/// Flat copy of all parameter values. This is also the persisted record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub effect: u16,
    pub palette: u16,
    pub brightness: u8,
    pub speed: u8,
    pub intensity: u8,
}

impl Snapshot {
    /// Value of `kind` widened to `u16`.
    pub fn get(&self, kind: ParameterKind) -> u16 {
        match kind {
            ParameterKind::Effect => self.effect,
            ParameterKind::Palette => self.palette,
            ParameterKind::Brightness => self.brightness as u16,
            ParameterKind::Speed => self.speed as u16,
            ParameterKind::Intensity => self.intensity as u16,
        }
    }
}
