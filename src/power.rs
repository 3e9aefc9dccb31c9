//! Display power management - OLED power-save after inactivity.
//!
//! Implements:
//! - Inactivity timeout (5 minutes by default)
//! - Wake on the first accepted input event
//!
//! Timestamps are milliseconds from a monotonic clock supplied by the
//! caller, so the policy runs unchanged on the host.

use crate::power_logic;

/// Awake/asleep state of the display plus the time of the last input.
#[derive(Clone, Copy, Debug)]
pub struct DisplayPower {
    awake: bool,
    last_activity_ms: u64,
    auto_off_enabled: bool,
    timeout_ms: u64,
}

impl DisplayPower {
    pub fn new(now_ms: u64, start_asleep: bool, auto_off_enabled: bool, timeout_ms: u64) -> Self {
        Self {
            awake: !start_asleep,
            last_activity_ms: now_ms,
            auto_off_enabled,
            timeout_ms,
        }
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms
    }

    /// Record an accepted input event.
    ///
    /// Returns `true` if the event woke the display; such an event must
    /// not be applied to the menu.
    pub fn activity(&mut self, now_ms: u64) -> bool {
        self.last_activity_ms = now_ms;
        if self.awake {
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Display: waking");
        self.awake = true;
        true
    }

    /// Periodic tick. Returns `true` when the display just went to sleep.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let idle_ms = now_ms.saturating_sub(self.last_activity_ms);
        let on = power_logic::screen_should_be_on(
            self.awake,
            self.auto_off_enabled,
            idle_ms,
            self.timeout_ms,
        );

        if self.awake && !on {
            #[cfg(feature = "defmt")]
            defmt::info!("Display: idle for {} ms, entering power-save", idle_ms);
            self.awake = false;
            return true;
        }
        false
    }
}
