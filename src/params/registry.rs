use super::{Direction, IndexDomain, ParameterKind, QuantityDomain, Snapshot};
use crate::config::Settings;
use crate::error::Error;
use crate::led::{CallMode, LedEngine};

/// Outcome of one [`ValueRegistry::adjust`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeResult {
    pub kind: ParameterKind,
    pub previous: u16,
    pub value: u16,
}

impl ChangeResult {
    /// `false` when the step was absorbed by a clamp.
    pub fn changed(&self) -> bool {
        self.previous != self.value
    }
}

/// Owner of the five live parameter values.
///
/// Values always satisfy their domain: indexes are in range and never
/// banned, quantities are in `0..=255`.
pub struct ValueRegistry {
    effects: IndexDomain,
    palettes: IndexDomain,
    quantity: QuantityDomain,
    values: Snapshot,
}

impl ValueRegistry {
    /// Build the registry from the injected catalogs, starting at `initial`.
    ///
    /// If `initial` violates a domain (e.g. it was saved against another
    /// catalog version) the whole record is replaced by the configured
    /// defaults, never merged field by field.
    pub fn from_settings(settings: &Settings, initial: Snapshot) -> Result<Self, Error> {
        let effects = IndexDomain::from_config(&settings.effects)?;
        let palettes = IndexDomain::from_config(&settings.palettes)?;
        let defaults = settings.defaults;

        let mut registry = Self {
            values: Snapshot {
                effect: effects.wrap_start(),
                palette: palettes.wrap_start(),
                ..defaults
            },
            effects,
            palettes,
            quantity: QuantityDomain::new(settings.quantity_step),
        };

        if !registry.restore(defaults) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Registry: configured defaults rejected, using wrap starts");
        }
        if !registry.restore(initial) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Registry: stored values rejected, using defaults");
        }

        Ok(registry)
    }

    /// Replace all values if every field fits its domain.
    ///
    /// Returns `false` and leaves the registry untouched otherwise.
    pub fn restore(&mut self, snapshot: Snapshot) -> bool {
        if !self.accepts(&snapshot) {
            return false;
        }
        self.values = snapshot;
        true
    }

    /// `true` if `snapshot` satisfies every domain invariant.
    pub fn accepts(&self, snapshot: &Snapshot) -> bool {
        self.effects.contains(snapshot.effect) && self.palettes.contains(snapshot.palette)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.values
    }

    pub fn value(&self, kind: ParameterKind) -> u16 {
        self.values.get(kind)
    }

    /// Step `kind` once in `direction` and forward the change to `led`.
    ///
    /// A step that is absorbed by a clamp returns an unchanged result and
    /// issues no engine calls.
    pub fn adjust<E: LedEngine>(
        &mut self,
        kind: ParameterKind,
        direction: Direction,
        led: &mut E,
    ) -> ChangeResult {
        let previous = self.values.get(kind);
        let value = match kind {
            ParameterKind::Effect => self.effects.step(self.values.effect, direction),
            ParameterKind::Palette => self.palettes.step(self.values.palette, direction),
            ParameterKind::Brightness => self.quantity.step(self.values.brightness, direction) as u16,
            ParameterKind::Speed => self.quantity.step(self.values.speed, direction) as u16,
            ParameterKind::Intensity => self.quantity.step(self.values.intensity, direction) as u16,
        };

        let result = ChangeResult {
            kind,
            previous,
            value,
        };
        if !result.changed() {
            return result;
        }

        self.store(kind, value);
        self.publish(kind, led, CallMode::Silent);
        led.notify_interfaces_updated(CallMode::Silent);

        #[cfg(feature = "defmt")]
        defmt::debug!("{} change: {} -> {}", kind, previous, value);

        result
    }

    /// Push every value to the engine, e.g. once after boot.
    pub fn publish_all<E: LedEngine>(&self, led: &mut E, mode: CallMode) {
        led.set_effect(self.values.effect);
        led.set_palette(self.values.palette);
        led.set_brightness(self.values.brightness);
        led.set_speed(self.values.speed);
        led.set_intensity(self.values.intensity);
        led.restart_animation();
        led.notify_color_updated(mode);
        led.notify_state_updated(mode);
        led.notify_interfaces_updated(mode);
    }

    fn store(&mut self, kind: ParameterKind, value: u16) {
        // Quantity steps are computed in u8, the narrowing is lossless.
        match kind {
            ParameterKind::Effect => self.values.effect = value,
            ParameterKind::Palette => self.values.palette = value,
            ParameterKind::Brightness => self.values.brightness = value as u8,
            ParameterKind::Speed => self.values.speed = value as u8,
            ParameterKind::Intensity => self.values.intensity = value as u8,
        }
    }

    fn publish<E: LedEngine>(&self, kind: ParameterKind, led: &mut E, mode: CallMode) {
        match kind {
            ParameterKind::Effect => {
                // Effects keep per-run state; restart before the colour refresh.
                led.set_effect(self.values.effect);
                led.restart_animation();
                led.notify_color_updated(mode);
            }
            ParameterKind::Palette => {
                led.set_palette(self.values.palette);
                led.notify_color_updated(mode);
            }
            ParameterKind::Brightness => {
                led.set_brightness(self.values.brightness);
                led.notify_state_updated(mode);
            }
            ParameterKind::Speed => {
                led.set_speed(self.values.speed);
                led.notify_color_updated(mode);
            }
            ParameterKind::Intensity => {
                led.set_intensity(self.values.intensity);
                led.notify_color_updated(mode);
            }
        }
    }
}
