//! Rotary encoder menu controller for an LED strip engine.
//!
//! A quadrature encoder with a push-button edits five LED parameters
//! (effect, palette, brightness, speed, intensity) through a small menu on
//! an SSD1306 OLED. Values are pushed to the LED engine as they change and
//! persisted to flash after a quiet period.
//!
//! All logic in this library is hardware-independent and runs on the host:
//!
//! Usage: `cargo test --features mock`
//!
//! The hardware adapters (GPIO, SSD1306, NVMC flash) and the firmware
//! binary in `main.rs` are only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod led;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod panel;
pub mod params;
pub mod power;
pub mod power_logic;
pub mod storage;
pub mod ui;

pub use config::Settings;
pub use error::{DomainError, Error};
pub use input::{InputEvent, InputLines, Line};
pub use led::{CallMode, LedEngine};
pub use panel::{Panel, TickReport};
pub use params::{ChangeResult, Direction, ParameterKind, Snapshot, ValueRegistry};
pub use storage::{ConfigStore, PersistenceGate, SaveOutcome, StoredConfig};
pub use ui::{DisplaySink, Font, NameLookup};
