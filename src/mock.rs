//! Recording doubles for the external collaborators.
//!
//! Built for unit tests and, with the `mock` feature, for the integration
//! tests. Everything is `no_std` and backed by `heapless`.

use heapless::{String, Vec};

use crate::error::Error;
use crate::input::{InputLines, Line};
use crate::led::{CallMode, LedEngine};
use crate::params::Snapshot;
use crate::storage::{ConfigStore, StoredConfig};
use crate::ui::layout::MAX_COLUMNS;
use crate::ui::{DisplaySink, Font};

pub use crate::ui::StaticNames;

/// Calls kept per recorder before newer ones are dropped.
pub const LOG_CAPACITY: usize = 128;

// ═══════════════════════════════════════════════════════════════════════════
// Input lines
// ═══════════════════════════════════════════════════════════════════════════

/// Line levels set directly by the test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedLines {
    pub a: bool,
    pub b: bool,
    pub button: bool,
}

impl ScriptedLines {
    /// All lines pulled up: knob at rest, button released.
    pub fn idle() -> Self {
        Self {
            a: true,
            b: true,
            button: true,
        }
    }

    pub fn set(&mut self, line: Line, level: bool) {
        match line {
            Line::EncoderA => self.a = level,
            Line::EncoderB => self.b = level,
            Line::Button => self.button = level,
        }
    }
}

impl InputLines for ScriptedLines {
    fn read_line(&mut self, line: Line) -> bool {
        match line {
            Line::EncoderA => self.a,
            Line::EncoderB => self.b,
            Line::Button => self.button,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LED engine
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedCall {
    SetEffect(u16),
    SetPalette(u16),
    SetBrightness(u8),
    SetSpeed(u8),
    SetIntensity(u8),
    RestartAnimation,
    ColorUpdated(CallMode),
    StateUpdated(CallMode),
    InterfacesUpdated(CallMode),
}

/// Engine that remembers the last values and every call in order.
#[derive(Debug, Default)]
pub struct RecordingLed {
    pub effect: Option<u16>,
    pub palette: Option<u16>,
    pub brightness: Option<u8>,
    pub speed: Option<u8>,
    pub intensity: Option<u8>,
    pub calls: Vec<LedCall, LOG_CAPACITY>,
}

impl RecordingLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, call: LedCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    fn record(&mut self, call: LedCall) {
        let _ = self.calls.push(call);
    }
}

impl LedEngine for RecordingLed {
    fn set_effect(&mut self, index: u16) {
        self.effect = Some(index);
        self.record(LedCall::SetEffect(index));
    }

    fn set_palette(&mut self, index: u16) {
        self.palette = Some(index);
        self.record(LedCall::SetPalette(index));
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = Some(value);
        self.record(LedCall::SetBrightness(value));
    }

    fn set_speed(&mut self, value: u8) {
        self.speed = Some(value);
        self.record(LedCall::SetSpeed(value));
    }

    fn set_intensity(&mut self, value: u8) {
        self.intensity = Some(value);
        self.record(LedCall::SetIntensity(value));
    }

    fn restart_animation(&mut self) {
        self.record(LedCall::RestartAnimation);
    }

    fn notify_color_updated(&mut self, mode: CallMode) {
        self.record(LedCall::ColorUpdated(mode));
    }

    fn notify_state_updated(&mut self, mode: CallMode) {
        self.record(LedCall::StateUpdated(mode));
    }

    fn notify_interfaces_updated(&mut self, mode: CallMode) {
        self.record(LedCall::InterfacesUpdated(mode));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnText {
    pub col: u8,
    pub row: u8,
    pub font: Font,
    pub text: String<MAX_COLUMNS>,
}

/// Character display that keeps what is on screen since the last clear.
#[derive(Debug)]
pub struct RecordingDisplay {
    pub font: Font,
    /// `Some(true)` while in power-save; `None` before the first command.
    pub power_save: Option<bool>,
    pub power_commands: usize,
    pub clears: usize,
    pub flushes: usize,
    pub texts: Vec<DrawnText, 32>,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self {
            font: Font::Regular,
            power_save: None,
            power_commands: 0,
            clears: 0,
            flushes: 0,
            texts: Vec::new(),
        }
    }
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text drawn at the start of `row`, if any.
    pub fn row(&self, row: u8) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.row == row && t.col == 0)
            .map(|t| t.text.as_str())
    }

    /// Every text drawn on `row`, in drawing order.
    pub fn row_texts(&self, row: u8) -> impl Iterator<Item = &DrawnText> {
        self.texts.iter().filter(move |t| t.row == row)
    }
}

impl DisplaySink for RecordingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
        self.texts.clear();
    }

    fn draw_text_at(&mut self, col: u8, row: u8, text: &str) {
        let mut copy = String::new();
        let _ = copy.push_str(text);
        let _ = self.texts.push(DrawnText {
            col,
            row,
            font: self.font,
            text: copy,
        });
    }

    fn set_power_save(&mut self, enabled: bool) {
        self.power_commands += 1;
        self.power_save = Some(enabled);
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Config store
// ═══════════════════════════════════════════════════════════════════════════

/// In-memory store with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub record: StoredConfig,
    pub fail_loads: bool,
    pub fail_saves: bool,
    /// Successful saves.
    pub writes: usize,
    /// Save calls, including failed ones.
    pub attempts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self::with_record(StoredConfig::from(snapshot))
    }

    pub fn with_record(record: StoredConfig) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Stored record, if complete.
    pub fn saved(&self) -> Option<Snapshot> {
        self.record.into_snapshot()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&mut self) -> Result<StoredConfig, Error> {
        if self.fail_loads {
            return Err(Error::StorageRead);
        }
        Ok(self.record)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        self.attempts += 1;
        if self.fail_saves {
            return Err(Error::StorageWrite);
        }
        self.record = StoredConfig::from(*snapshot);
        self.writes += 1;
        Ok(())
    }
}
