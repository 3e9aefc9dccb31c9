//! Persistent storage for the five parameter values.
//!
//! The record is a flat key-value map, one key per field:
//!
//! ```text
//! key  field        value
//! 0x01 effect       u16
//! 0x02 palette      u16
//! 0x03 brightness   u16 (0..=255)
//! 0x04 speed        u16 (0..=255)
//! 0x05 intensity    u16 (0..=255)
//! ```
//!
//! A record is used only when every field is present and in range;
//! anything else falls back to the configured defaults as a whole.
//! Writes are coalesced by [`PersistenceGate`].

#[cfg(feature = "embedded")]
pub mod flash;
mod gate;

pub use gate::{PersistenceGate, SaveOutcome};

use crate::error::Error;
use crate::params::Snapshot;

pub const KEY_EFFECT: u8 = 0x01;
pub const KEY_PALETTE: u8 = 0x02;
pub const KEY_BRIGHTNESS: u8 = 0x03;
pub const KEY_SPEED: u8 = 0x04;
pub const KEY_INTENSITY: u8 = 0x05;

/// Record as read back from a store; fields the store did not have are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredConfig {
    pub effect: Option<u16>,
    pub palette: Option<u16>,
    pub brightness: Option<u16>,
    pub speed: Option<u16>,
    pub intensity: Option<u16>,
}

impl StoredConfig {
    /// `true` if every field is present.
    pub fn is_complete(&self) -> bool {
        self.effect.is_some()
            && self.palette.is_some()
            && self.brightness.is_some()
            && self.speed.is_some()
            && self.intensity.is_some()
    }

    /// Convert a complete record whose quantities fit in a byte.
    pub fn into_snapshot(self) -> Option<Snapshot> {
        Some(Snapshot {
            effect: self.effect?,
            palette: self.palette?,
            brightness: u8::try_from(self.brightness?).ok()?,
            speed: u8::try_from(self.speed?).ok()?,
            intensity: u8::try_from(self.intensity?).ok()?,
        })
    }

    /// Write `value` under the map `key`. Unknown keys are ignored.
    pub fn set(&mut self, key: u8, value: u16) {
        match key {
            KEY_EFFECT => self.effect = Some(value),
            KEY_PALETTE => self.palette = Some(value),
            KEY_BRIGHTNESS => self.brightness = Some(value),
            KEY_SPEED => self.speed = Some(value),
            KEY_INTENSITY => self.intensity = Some(value),
            _ => {}
        }
    }
}

impl From<Snapshot> for StoredConfig {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            effect: Some(snapshot.effect),
            palette: Some(snapshot.palette),
            brightness: Some(snapshot.brightness as u16),
            speed: Some(snapshot.speed as u16),
            intensity: Some(snapshot.intensity as u16),
        }
    }
}

/// Map key and value for each field of `snapshot`, in key order.
pub fn entries(snapshot: &Snapshot) -> [(u8, u16); 5] {
    [
        (KEY_EFFECT, snapshot.effect),
        (KEY_PALETTE, snapshot.palette),
        (KEY_BRIGHTNESS, snapshot.brightness as u16),
        (KEY_SPEED, snapshot.speed as u16),
        (KEY_INTENSITY, snapshot.intensity as u16),
    ]
}

/// Source and sink of the persisted record.
pub trait ConfigStore {
    fn load(&mut self) -> Result<StoredConfig, Error>;
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), Error>;
}

/// Values to start from: the stored record if it is complete, else `defaults`.
///
/// Domain checks (banned or out-of-range indexes) happen later in
/// [`ValueRegistry::from_settings`](crate::params::ValueRegistry::from_settings).
pub fn initial_snapshot<S: ConfigStore>(store: &mut S, defaults: Snapshot) -> Snapshot {
    match store.load() {
        Ok(stored) => match stored.into_snapshot() {
            Some(snapshot) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Storage: loaded {}", snapshot);
                snapshot
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::info!("Storage: no complete record, using defaults");
                defaults
            }
        },
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Storage: load failed ({}), using defaults", _e);
            defaults
        }
    }
}
