//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, catalog data and
//! persistence constants live here so they can be tuned in one place.
//! [`Settings`] bundles them into a value that can be injected, so tests
//! and other catalog versions do not need to touch the constants.

use crate::input::EncoderPolarity;
use crate::params::{CatalogConfig, Snapshot};
use crate::ui::menu::MenuStyle;

// Input sampling

/// Input polling period (ms). Every component runs once per tick.
pub const TICK_MS: u64 = 2;

/// Minimum time between two accepted button presses (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 250;

/// Encoder wiring. The first boards had the B line flipped; change this
/// instead of the decoder when a board reports inverted rotation.
pub const ENCODER_POLARITY: EncoderPolarity = EncoderPolarity::ClockwiseWhenBHigh;

// Menu

/// Menu behaviour: arming (press toggles edit mode) or the classic
/// press-to-cycle layout.
pub const MENU_STYLE: MenuStyle = MenuStyle::Arming;

/// Step applied to brightness, speed and intensity per detent.
pub const QUANTITY_STEP: u8 = 5;

// Display

/// Boot with the OLED in power-save until the first input.
pub const DISPLAY_START_ASLEEP: bool = false;

/// Enable automatic OLED power-save after inactivity.
pub const DISPLAY_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before the OLED enters power-save (ms). 5 minutes.
pub const DISPLAY_INACTIVITY_TIMEOUT_MS: u64 = 5 * 60 * 1000;

/// Character grid of the display (8×8 px cells on a 128×64 panel).
pub const DISPLAY_COLUMNS: u8 = 16;
pub const DISPLAY_ROWS: u8 = 8;

/// SSD1306 I²C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

// LED engine catalogs
//
// The banned lists are tied to one version of the effect/palette catalog of
// the LED engine. Entries are skipped while scrolling.

/// Number of effects exposed by the LED engine.
pub const EFFECT_COUNT: u16 = 118;

/// Effect selected after wrapping past the last effect.
pub const EFFECT_WRAP_START: u16 = 1;

/// Effects that are never offered in the menu.
pub const BANNED_EFFECTS: &[u16] = &[0, 50, 62, 82, 83, 84, 96, 98, 116];

/// Number of palettes exposed by the LED engine.
pub const PALETTE_COUNT: u16 = 71;

/// Palette selected after wrapping past the last palette.
pub const PALETTE_WRAP_START: u16 = 6;

/// Palettes that are never offered in the menu (the engine's computed ones).
pub const BANNED_PALETTES: &[u16] = &[0, 1, 2, 3, 4, 5];

/// Maximum number of banned entries per catalog.
pub const MAX_BANNED: usize = 16;

/// Values used when no complete record is found in flash.
pub const DEFAULT_SNAPSHOT: Snapshot = Snapshot {
    effect: EFFECT_WRAP_START,
    palette: PALETTE_WRAP_START,
    brightness: 128,
    speed: 128,
    intensity: 128,
};

// Persistence

/// Minimum time between two flash writes (ms).
pub const PERSIST_QUIET_INTERVAL_MS: u64 = 15_000;

/// Flash page index where the settings map starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the settings map.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A (CLK)  → P0.11
//   Encoder B (DT)   → P0.12
//   Encoder switch   → P0.24
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27

/// Runtime view of the constants above.
#[derive(Clone, Debug)]
pub struct Settings {
    pub debounce_ms: u64,
    pub polarity: EncoderPolarity,
    pub menu_style: MenuStyle,
    pub quantity_step: u8,
    pub start_asleep: bool,
    pub auto_off_enabled: bool,
    pub inactivity_timeout_ms: u64,
    pub quiet_interval_ms: u64,
    pub columns: u8,
    pub rows: u8,
    pub effects: CatalogConfig,
    pub palettes: CatalogConfig,
    pub defaults: Snapshot,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            polarity: ENCODER_POLARITY,
            menu_style: MENU_STYLE,
            quantity_step: QUANTITY_STEP,
            start_asleep: DISPLAY_START_ASLEEP,
            auto_off_enabled: DISPLAY_AUTO_OFF_ENABLED,
            inactivity_timeout_ms: DISPLAY_INACTIVITY_TIMEOUT_MS,
            quiet_interval_ms: PERSIST_QUIET_INTERVAL_MS,
            columns: DISPLAY_COLUMNS,
            rows: DISPLAY_ROWS,
            effects: CatalogConfig {
                count: EFFECT_COUNT,
                wrap_start: EFFECT_WRAP_START,
                banned: BANNED_EFFECTS,
            },
            palettes: CatalogConfig {
                count: PALETTE_COUNT,
                wrap_start: PALETTE_WRAP_START,
                banned: BANNED_PALETTES,
            },
            defaults: DEFAULT_SNAPSHOT,
        }
    }
}
