use super::*;
use crate::config::{Settings, BANNED_EFFECTS, DEFAULT_SNAPSHOT};
use crate::error::{DomainError, Error};
use crate::led::CallMode;
use crate::mock::{LedCall, RecordingLed};

fn registry() -> ValueRegistry {
    ValueRegistry::from_settings(&Settings::default(), DEFAULT_SNAPSHOT).unwrap()
}

fn registry_at(snapshot: Snapshot) -> ValueRegistry {
    ValueRegistry::from_settings(&Settings::default(), snapshot).unwrap()
}

// ════════════════════════════════════════════════════════════════════════
// IndexDomain
// ════════════════════════════════════════════════════════════════════════

#[test]
fn banned_values_are_never_returned() {
    let settings = Settings::default();
    for config in [settings.effects, settings.palettes] {
        let domain = IndexDomain::from_config(&config).unwrap();
        for start in 0..config.count {
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                let mut value = start;
                for _ in 0..config.count {
                    value = domain.step(value, direction);
                    assert!(domain.contains(value), "{} from {}", value, start);
                }
            }
        }
    }
}

#[test]
fn full_cycle_returns_to_wrap_start() {
    let settings = Settings::default();
    for config in [settings.effects, settings.palettes] {
        let domain = IndexDomain::from_config(&config).unwrap();
        let mut value = domain.wrap_start();
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..domain.selectable_count() {
            value = domain.step(value, Direction::Clockwise);
            assert!(seen.insert(value), "{} visited twice", value);
        }
        assert_eq!(value, domain.wrap_start());
        assert!(config.banned.iter().all(|b| !seen.contains(b)));
    }
}

#[test]
fn wrap_goes_to_wrap_start_and_max() {
    let domain = IndexDomain::new(118, 1, BANNED_EFFECTS).unwrap();
    assert_eq!(domain.max(), 117);
    assert_eq!(domain.step(117, Direction::Clockwise), 1);
    assert_eq!(domain.step(1, Direction::CounterClockwise), 117);
    assert_eq!(domain.step(115, Direction::Clockwise), 117);
    assert_eq!(domain.step(85, Direction::CounterClockwise), 81);
}

#[test]
fn banned_max_is_stepped_past_after_wrapping_down() {
    let domain = IndexDomain::new(10, 2, &[0, 1, 9]).unwrap();
    assert_eq!(domain.step(2, Direction::CounterClockwise), 8);
    assert_eq!(domain.step(8, Direction::Clockwise), 2);
}

#[test]
fn invalid_catalogs_are_rejected() {
    assert_eq!(IndexDomain::new(0, 0, &[]).unwrap_err(), DomainError::EmptyCatalog);
    assert_eq!(
        IndexDomain::new(10, 10, &[]).unwrap_err(),
        DomainError::WrapStartOutOfRange
    );
    assert_eq!(
        IndexDomain::new(10, 3, &[3]).unwrap_err(),
        DomainError::WrapStartBanned
    );
    let many: [u16; 17] = core::array::from_fn(|i| i as u16 + 1);
    assert_eq!(
        IndexDomain::new(100, 0, &many).unwrap_err(),
        DomainError::TooManyBanned
    );
}

#[test]
fn registry_reports_catalog_errors() {
    let mut settings = Settings::default();
    settings.palettes.wrap_start = 0;
    assert_eq!(
        ValueRegistry::from_settings(&settings, DEFAULT_SNAPSHOT).err(),
        Some(Error::Domain(DomainError::WrapStartBanned))
    );
}

// ════════════════════════════════════════════════════════════════════════
// QuantityDomain
// ════════════════════════════════════════════════════════════════════════

#[test]
fn quantity_stays_in_range() {
    let domain = QuantityDomain::new(5);
    assert_eq!(domain.step(253, Direction::Clockwise), 255);
    assert_eq!(domain.step(255, Direction::Clockwise), 255);
    assert_eq!(domain.step(3, Direction::CounterClockwise), 0);
    assert_eq!(domain.step(0, Direction::CounterClockwise), 0);
}

#[test]
fn quantity_step_is_reversible_away_from_bounds() {
    let domain = QuantityDomain::new(5);
    for value in 5..=250u8 {
        let up = domain.step(value, Direction::Clockwise);
        assert_eq!(domain.step(up, Direction::CounterClockwise), value);
    }
}

// ════════════════════════════════════════════════════════════════════════
// ValueRegistry
// ════════════════════════════════════════════════════════════════════════

#[test]
fn forty_nine_clockwise_steps_skip_banned_fifty() {
    let mut registry = registry();
    let mut led = RecordingLed::new();
    assert_eq!(registry.value(ParameterKind::Effect), 1);

    for _ in 0..49 {
        registry.adjust(ParameterKind::Effect, Direction::Clockwise, &mut led);
    }
    assert_eq!(registry.value(ParameterKind::Effect), 51);
    assert_eq!(led.effect, Some(51));
}

#[test]
fn brightness_clamps_at_top() {
    let mut registry = registry_at(Snapshot {
        brightness: 250,
        ..DEFAULT_SNAPSHOT
    });
    let mut led = RecordingLed::new();

    let first = registry.adjust(ParameterKind::Brightness, Direction::Clockwise, &mut led);
    assert!(first.changed());
    assert_eq!(first.value, 255);

    led.clear_calls();
    let second = registry.adjust(ParameterKind::Brightness, Direction::Clockwise, &mut led);
    assert!(!second.changed());
    assert_eq!(second.value, 255);
    assert!(led.calls.is_empty());
}

#[test]
fn effect_change_restarts_animation_before_colour_update() {
    let mut registry = registry();
    let mut led = RecordingLed::new();

    registry.adjust(ParameterKind::Effect, Direction::Clockwise, &mut led);
    assert_eq!(
        led.calls.as_slice(),
        &[
            LedCall::SetEffect(2),
            LedCall::RestartAnimation,
            LedCall::ColorUpdated(CallMode::Silent),
            LedCall::InterfacesUpdated(CallMode::Silent),
        ]
    );
}

#[test]
fn brightness_change_updates_state() {
    let mut registry = registry();
    let mut led = RecordingLed::new();

    registry.adjust(ParameterKind::Brightness, Direction::CounterClockwise, &mut led);
    assert_eq!(
        led.calls.as_slice(),
        &[
            LedCall::SetBrightness(123),
            LedCall::StateUpdated(CallMode::Silent),
            LedCall::InterfacesUpdated(CallMode::Silent),
        ]
    );
}

#[test]
fn palette_speed_intensity_update_colour() {
    let mut registry = registry();
    let mut led = RecordingLed::new();

    registry.adjust(ParameterKind::Palette, Direction::Clockwise, &mut led);
    registry.adjust(ParameterKind::Speed, Direction::Clockwise, &mut led);
    registry.adjust(ParameterKind::Intensity, Direction::Clockwise, &mut led);
    assert_eq!(
        led.calls.as_slice(),
        &[
            LedCall::SetPalette(7),
            LedCall::ColorUpdated(CallMode::Silent),
            LedCall::InterfacesUpdated(CallMode::Silent),
            LedCall::SetSpeed(133),
            LedCall::ColorUpdated(CallMode::Silent),
            LedCall::InterfacesUpdated(CallMode::Silent),
            LedCall::SetIntensity(133),
            LedCall::ColorUpdated(CallMode::Silent),
            LedCall::InterfacesUpdated(CallMode::Silent),
        ]
    );
    assert_eq!(led.count(LedCall::RestartAnimation), 0);
}

#[test]
fn publish_all_pushes_every_value() {
    let registry = registry();
    let mut led = RecordingLed::new();

    registry.publish_all(&mut led, CallMode::DirectChange);
    assert_eq!(led.effect, Some(1));
    assert_eq!(led.palette, Some(6));
    assert_eq!(led.brightness, Some(128));
    assert_eq!(led.speed, Some(128));
    assert_eq!(led.intensity, Some(128));
    assert_eq!(led.count(LedCall::RestartAnimation), 1);
    assert_eq!(led.count(LedCall::InterfacesUpdated(CallMode::DirectChange)), 1);
}

#[test]
fn invalid_initial_values_fall_back_as_a_whole() {
    let registry = registry_at(Snapshot {
        effect: 50,
        brightness: 10,
        ..DEFAULT_SNAPSHOT
    });
    assert_eq!(registry.snapshot(), DEFAULT_SNAPSHOT);

    let registry = registry_at(Snapshot {
        palette: 71,
        ..DEFAULT_SNAPSHOT
    });
    assert_eq!(registry.snapshot(), DEFAULT_SNAPSHOT);
}

#[test]
fn restore_rejects_without_side_effects() {
    let mut registry = registry();
    let before = registry.snapshot();
    assert!(!registry.restore(Snapshot {
        palette: 3,
        ..DEFAULT_SNAPSHOT
    }));
    assert_eq!(registry.snapshot(), before);

    let valid = Snapshot {
        effect: 17,
        ..DEFAULT_SNAPSHOT
    };
    assert!(registry.restore(valid));
    assert_eq!(registry.snapshot(), valid);
}

#[test]
fn focus_cycles_through_all_parameters() {
    let mut kind = ParameterKind::Effect;
    for expected in ParameterKind::ALL.iter().skip(1) {
        kind = kind.cycle(Direction::Clockwise);
        assert_eq!(kind, *expected);
    }
    assert_eq!(kind.next(), ParameterKind::Effect);
    assert_eq!(ParameterKind::Effect.prev(), ParameterKind::Intensity);
}
