//! Menu state machine.
//!
//! ```text
//!   Focus(selected, armed)  x  {awake, asleep}
//!
//!   Arming style          unarmed             armed
//!   Rotate              cycle focus         adjust value
//!   Rotate + pressed    cycle focus         cycle focus
//!   Press               arm                 disarm
//!
//!   Classic style: always armed, press cycles focus forward.
//! ```
//!
//! While asleep the first accepted event only wakes the display.

use crate::config::Settings;
use crate::input::InputEvent;
use crate::led::LedEngine;
use crate::params::{ChangeResult, Direction, ParameterKind, ValueRegistry};
use crate::power::DisplayPower;

/// How a button press and plain rotation are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuStyle {
    /// A press arms the focused parameter; rotation edits only when armed.
    Arming,
    /// No arming: rotation always edits, a press moves to the next parameter.
    Classic,
}

/// Focused parameter and whether rotation edits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuFocus {
    pub selected: ParameterKind,
    pub armed: bool,
}

/// What one event did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// No event this tick.
    Idle,
    /// The event woke the display and was consumed.
    Woke,
    FocusMoved(ParameterKind),
    Armed(bool),
    /// The focused value was stepped; `changed()` is false at a clamp.
    Adjusted(ChangeResult),
}

pub struct MenuController {
    style: MenuStyle,
    focus: MenuFocus,
    power: DisplayPower,
}

impl MenuController {
    pub fn new(settings: &Settings, now_ms: u64) -> Self {
        Self {
            style: settings.menu_style,
            focus: MenuFocus {
                selected: ParameterKind::Effect,
                armed: settings.menu_style == MenuStyle::Classic,
            },
            power: DisplayPower::new(
                now_ms,
                settings.start_asleep,
                settings.auto_off_enabled,
                settings.inactivity_timeout_ms,
            ),
        }
    }

    pub fn focus(&self) -> MenuFocus {
        self.focus
    }

    pub fn is_awake(&self) -> bool {
        self.power.is_awake()
    }

    pub fn last_activity_ms(&self) -> u64 {
        self.power.last_activity_ms()
    }

    /// Apply one input event.
    pub fn handle<E: LedEngine>(
        &mut self,
        now_ms: u64,
        event: Option<InputEvent>,
        registry: &mut ValueRegistry,
        led: &mut E,
    ) -> MenuAction {
        let Some(event) = event else {
            return MenuAction::Idle;
        };

        if self.power.activity(now_ms) {
            return MenuAction::Woke;
        }

        let Some(direction) = event.direction() else {
            return self.press();
        };

        if event.is_pressed_rotation() || !self.focus.armed {
            self.move_focus(direction)
        } else {
            MenuAction::Adjusted(registry.adjust(self.focus.selected, direction, led))
        }
    }

    /// Put the display to sleep after the inactivity timeout.
    ///
    /// Runs every tick, with or without an event. Returns `true` on the tick
    /// the display goes to sleep.
    pub fn check_inactivity(&mut self, now_ms: u64) -> bool {
        self.power.tick(now_ms)
    }

    fn press(&mut self) -> MenuAction {
        match self.style {
            MenuStyle::Arming => {
                self.focus.armed = !self.focus.armed;
                #[cfg(feature = "defmt")]
                defmt::debug!("Menu: {} armed={}", self.focus.selected, self.focus.armed);
                MenuAction::Armed(self.focus.armed)
            }
            MenuStyle::Classic => self.move_focus(Direction::Clockwise),
        }
    }

    // Focus moves keep the armed flag.
    fn move_focus(&mut self, direction: Direction) -> MenuAction {
        self.focus.selected = self.focus.selected.cycle(direction);
        #[cfg(feature = "defmt")]
        defmt::debug!("Menu: focus {}", self.focus.selected);
        MenuAction::FocusMoved(self.focus.selected)
    }
}
