use heapless::Vec;

use super::{CatalogConfig, Direction};
use crate::config::MAX_BANNED;
use crate::error::DomainError;

/// Enumerable catalog with excluded entries and wraparound.
///
/// Valid values are `0..=max` minus the banned set. Stepping is
/// skip-then-wrap: banned entries are stepped over first, then the range
/// check wraps to `wrap_start` (upwards) or `max` (downwards).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexDomain {
    max: u16,
    wrap_start: u16,
    banned: Vec<u16, MAX_BANNED>,
}

impl IndexDomain {
    pub const MIN: u16 = 0;

    /// Build a domain for a catalog of `count` entries.
    ///
    /// Banned entries outside the catalog are ignored.
    pub fn new(count: u16, wrap_start: u16, banned: &[u16]) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::EmptyCatalog);
        }
        if wrap_start >= count {
            return Err(DomainError::WrapStartOutOfRange);
        }
        if banned.contains(&wrap_start) {
            return Err(DomainError::WrapStartBanned);
        }

        let mut set: Vec<u16, MAX_BANNED> = Vec::new();
        for &b in banned.iter().filter(|&&b| b < count) {
            if !set.contains(&b) {
                set.push(b).map_err(|_| DomainError::TooManyBanned)?;
            }
        }

        Ok(Self {
            max: count - 1,
            wrap_start,
            banned: set,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, DomainError> {
        Self::new(config.count, config.wrap_start, config.banned)
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn wrap_start(&self) -> u16 {
        self.wrap_start
    }

    pub fn is_banned(&self, value: u16) -> bool {
        self.banned.contains(&value)
    }

    /// `true` if `value` may be held by a parameter of this domain.
    pub fn contains(&self, value: u16) -> bool {
        value <= self.max && !self.is_banned(value)
    }

    /// Number of values reachable by stepping.
    pub fn selectable_count(&self) -> usize {
        self.max as usize + 1 - self.banned.len()
    }

    /// Next selectable value from `from` in `direction`.
    pub fn step(&self, from: u16, direction: Direction) -> u16 {
        let delta = direction.sign();
        let min = Self::MIN as i32;
        let max = self.max as i32;
        let mut value = from as i32;

        // Wrapping down may land on a banned `max`; the next lap steps past it.
        for _ in 0..=self.max as usize + 1 {
            value += delta;
            while value >= min && value <= max && self.is_banned(value as u16) {
                value += delta;
            }

            if value > max {
                value = self.wrap_start as i32;
            } else if value < min {
                value = max;
            }

            if !self.is_banned(value as u16) {
                return value as u16;
            }
        }

        from
    }
}

/// Bounded numeric range `0..=255` with linear stepping and clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantityDomain {
    step: u8,
}

impl QuantityDomain {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 255;

    pub const fn new(step: u8) -> Self {
        Self { step }
    }

    /// Add or subtract one step, clamped to the range.
    pub fn step(&self, from: u8, direction: Direction) -> u8 {
        match direction {
            Direction::Clockwise => from.saturating_add(self.step),
            Direction::CounterClockwise => from.saturating_sub(self.step),
        }
    }
}
