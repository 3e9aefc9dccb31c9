//! End-to-end tests: scripted encoder lines in, LED calls, display frames
//! and flash writes out.

use rotary_panel::config::{Settings, DEFAULT_SNAPSHOT, TICK_MS};
use rotary_panel::input::{EncoderPolarity, Line};
use rotary_panel::mock::{LedCall, MemoryStore, RecordingDisplay, RecordingLed, ScriptedLines};
use rotary_panel::ui::menu::{MenuAction, MenuFocus};
use rotary_panel::ui::StaticNames;
use rotary_panel::{
    CallMode, ConfigStore, Direction, Panel, ParameterKind, SaveOutcome, Snapshot, TickReport,
};

type TestPanel = Panel<ScriptedLines, RecordingLed, RecordingDisplay, StaticNames, MemoryStore>;

const EFFECT_NAMES: &[&str] = &["Solid", "Blink", "Breathe", "* Wipe"];

/// Panel plus a clock advanced by the test.
struct Rig {
    panel: TestPanel,
    now: u64,
}

impl Rig {
    fn new(settings: Settings, store: MemoryStore) -> Self {
        let panel = Panel::new(
            &settings,
            ScriptedLines::idle(),
            RecordingLed::new(),
            RecordingDisplay::new(),
            StaticNames::new(EFFECT_NAMES, &[]),
            store,
            0,
        )
        .expect("default catalogs are valid");
        Self { panel, now: 0 }
    }

    fn tick(&mut self) -> TickReport {
        self.now += TICK_MS;
        self.panel.tick(self.now)
    }

    fn tick_at(&mut self, now: u64) -> TickReport {
        self.now = now;
        self.panel.tick(now)
    }

    /// One encoder detent; returns the report of the tick that saw it.
    fn detent(&mut self, direction: Direction) -> TickReport {
        let lines = self.panel.lines_mut();
        lines.set(Line::EncoderB, direction == Direction::Clockwise);
        self.tick();

        self.panel.lines_mut().set(Line::EncoderA, false);
        let report = self.tick();

        self.panel.lines_mut().set(Line::EncoderA, true);
        self.tick();
        report
    }

    /// Press and release the switch; returns the report of the press tick.
    fn press(&mut self) -> TickReport {
        self.panel.lines_mut().set(Line::Button, false);
        let report = self.tick();
        self.panel.lines_mut().set(Line::Button, true);
        self.tick();
        report
    }
}

// ════════════════════════════════════════════════════════════════════════
// Start-up
// ════════════════════════════════════════════════════════════════════════

#[test]
fn startup_pushes_values_and_draws_first_frame() {
    let rig = Rig::new(Settings::default(), MemoryStore::new());

    let led = rig.panel.led();
    assert_eq!(led.effect, Some(1));
    assert_eq!(led.palette, Some(6));
    assert_eq!(led.count(LedCall::RestartAnimation), 1);
    assert_eq!(led.count(LedCall::StateUpdated(CallMode::DirectChange)), 1);

    let display = rig.panel.display();
    assert_eq!(display.power_save, Some(false));
    assert_eq!(display.row(0), Some("Effect"));
    assert_eq!(display.row(2), Some("Blink"));
}

#[test]
fn startup_restores_saved_values() {
    let saved = Snapshot {
        effect: 3,
        palette: 20,
        brightness: 40,
        speed: 0,
        intensity: 255,
    };
    let rig = Rig::new(Settings::default(), MemoryStore::with_snapshot(saved));
    assert_eq!(rig.panel.registry().snapshot(), saved);
    assert_eq!(rig.panel.display().row(2), Some("Wipe"));
}

#[test]
fn display_wider_than_text_buffer_is_rejected() {
    let settings = Settings {
        columns: 40,
        ..Settings::default()
    };
    let result = Panel::new(
        &settings,
        ScriptedLines::idle(),
        RecordingLed::new(),
        RecordingDisplay::new(),
        StaticNames::new(EFFECT_NAMES, &[]),
        MemoryStore::new(),
        0,
    );
    assert!(matches!(result, Err(rotary_panel::Error::DisplayTooWide)));
}

#[test]
fn saved_banned_effect_falls_back_to_defaults() {
    let saved = Snapshot {
        effect: 62,
        ..DEFAULT_SNAPSHOT
    };
    let rig = Rig::new(Settings::default(), MemoryStore::with_snapshot(saved));
    assert_eq!(rig.panel.registry().snapshot(), DEFAULT_SNAPSHOT);
}

// ════════════════════════════════════════════════════════════════════════
// Scenarios
// ════════════════════════════════════════════════════════════════════════

#[test]
fn effect_scroll_skips_banned_value() {
    let mut rig = Rig::new(Settings::default(), MemoryStore::new());
    assert_eq!(rig.press().action, MenuAction::Armed(true));

    for _ in 0..49 {
        rig.detent(Direction::Clockwise);
    }
    assert_eq!(rig.panel.registry().value(ParameterKind::Effect), 51);
    assert_eq!(rig.panel.led().effect, Some(51));
    assert_eq!(rig.panel.display().row(2), Some("#51"));
    assert_eq!(rig.panel.display().row(0), Some("> Effect"));
}

#[test]
fn brightness_clamps_at_full() {
    let store = MemoryStore::with_snapshot(Snapshot {
        brightness: 250,
        ..DEFAULT_SNAPSHOT
    });
    let mut rig = Rig::new(Settings::default(), store);

    rig.detent(Direction::Clockwise);
    rig.detent(Direction::Clockwise);
    assert_eq!(rig.panel.focus().selected, ParameterKind::Brightness);
    rig.press();

    let first = rig.detent(Direction::Clockwise);
    match first.action {
        MenuAction::Adjusted(change) => assert_eq!(change.value, 255),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(rig.panel.display().row(2), Some("100%"));

    let second = rig.detent(Direction::Clockwise);
    match second.action {
        MenuAction::Adjusted(change) => {
            assert!(!change.changed());
            assert_eq!(change.value, 255);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(rig.panel.registry().value(ParameterKind::Brightness), 255);
}

#[test]
fn press_while_asleep_only_wakes() {
    let settings = Settings {
        start_asleep: true,
        ..Settings::default()
    };
    let mut rig = Rig::new(settings, MemoryStore::new());
    assert!(!rig.panel.is_awake());
    assert_eq!(rig.panel.display().power_save, Some(true));
    assert_eq!(rig.panel.display().clears, 0);

    rig.now = 1_000;
    let before = rig.panel.registry().snapshot();
    let calls = rig.panel.led().calls.len();

    let report = rig.press();
    assert_eq!(report.action, MenuAction::Woke);
    assert!(report.redrawn);
    assert!(rig.panel.is_awake());
    assert_eq!(
        rig.panel.focus(),
        MenuFocus {
            selected: ParameterKind::Effect,
            armed: false
        }
    );
    assert_eq!(rig.panel.registry().snapshot(), before);
    assert_eq!(rig.panel.led().calls.len(), calls);
    assert_eq!(rig.panel.display().power_save, Some(false));
}

#[test]
fn release_bounce_after_long_hold_keeps_armed() {
    let mut rig = Rig::new(Settings::default(), MemoryStore::new());

    rig.panel.lines_mut().set(Line::Button, false);
    assert_eq!(rig.tick().action, MenuAction::Armed(true));
    rig.tick_at(1_000);

    for level in [true, false, true] {
        rig.panel.lines_mut().set(Line::Button, level);
        assert_eq!(rig.tick().action, MenuAction::Idle);
    }
    assert!(rig.panel.focus().armed);

    rig.tick_at(1_500);
    assert_eq!(rig.press().action, MenuAction::Armed(false));
}

#[test]
fn display_sleeps_after_inactivity() {
    let mut rig = Rig::new(Settings::default(), MemoryStore::new());
    rig.detent(Direction::Clockwise);
    let last_input = rig.now - TICK_MS;

    assert!(!rig.tick_at(last_input + 300_000).slept);
    let report = rig.tick_at(last_input + 300_001);
    assert!(report.slept);
    assert!(!rig.panel.is_awake());
    assert_eq!(rig.panel.display().power_save, Some(true));

    // Rotation while asleep wakes without moving focus.
    let report = rig.detent(Direction::Clockwise);
    assert_eq!(report.action, MenuAction::Woke);
    assert_eq!(rig.panel.focus().selected, ParameterKind::Palette);
}

#[test]
fn change_is_saved_after_quiet_interval() {
    let mut rig = Rig::new(Settings::default(), MemoryStore::new());

    rig.detent(Direction::Clockwise);
    rig.press();
    rig.now = 96;
    let report = rig.detent(Direction::Clockwise);
    assert_eq!(rig.now, 102);
    assert!(matches!(report.action, MenuAction::Adjusted(c) if c.value == 7));

    assert_eq!(rig.tick_at(5_000).save, SaveOutcome::Waiting);
    assert_eq!(rig.panel.store().writes, 0);

    assert_eq!(rig.tick_at(15_100).save, SaveOutcome::Saved);
    assert_eq!(rig.panel.store().writes, 1);
    assert_eq!(rig.panel.store().saved(), Some(rig.panel.registry().snapshot()));
    assert_eq!(rig.panel.gate().saved().palette, 7);
}

#[test]
fn failed_save_is_retried_next_interval() {
    let mut rig = Rig::new(Settings::default(), MemoryStore::new());
    rig.press();
    rig.detent(Direction::Clockwise);
    rig.panel.store_mut().fail_saves = true;

    assert!(matches!(
        rig.tick_at(15_500).save,
        SaveOutcome::Failed(rotary_panel::Error::StorageWrite)
    ));
    assert_eq!(rig.tick().save, SaveOutcome::Waiting);
    assert_eq!(rig.panel.store().attempts, 1);

    rig.panel.store_mut().fail_saves = false;
    assert_eq!(rig.tick_at(30_501).save, SaveOutcome::Saved);
    assert_eq!(rig.panel.store_mut().load().unwrap().effect, Some(2));
}

#[test]
fn flipped_encoder_wiring_reverses_direction() {
    let settings = Settings {
        polarity: EncoderPolarity::ClockwiseWhenBLow,
        ..Settings::default()
    };
    let mut rig = Rig::new(settings, MemoryStore::new());
    rig.detent(Direction::Clockwise);
    assert_eq!(rig.panel.focus().selected, ParameterKind::Intensity);
}
