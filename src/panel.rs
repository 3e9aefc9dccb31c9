//! Top-level controller: one [`Panel::tick`] per input period.
//!
//! Order inside a tick:
//!
//! 1. sample the input lines
//! 2. apply the event to the menu (and through it, the registry + LED engine)
//! 3. inactivity check
//! 4. display power and redraw
//! 5. persistence gate

use crate::config::Settings;
use crate::error::Error;
use crate::input::{InputLines, InputSampler};
use crate::led::{CallMode, LedEngine};
use crate::params::ValueRegistry;
use crate::storage::{initial_snapshot, ConfigStore, PersistenceGate, SaveOutcome};
use crate::ui::layout::MAX_COLUMNS;
use crate::ui::menu::{MenuAction, MenuController, MenuFocus};
use crate::ui::render::DisplayRenderer;
use crate::ui::{DisplaySink, NameLookup};

/// Everything that happened in one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub action: MenuAction,
    pub slept: bool,
    pub redrawn: bool,
    pub save: SaveOutcome,
}

pub struct Panel<L, E, D, N, S> {
    sampler: InputSampler<L>,
    menu: MenuController,
    registry: ValueRegistry,
    renderer: DisplayRenderer,
    gate: PersistenceGate,
    led: E,
    display: D,
    names: N,
    store: S,
}

impl<L, E, D, N, S> Panel<L, E, D, N, S>
where
    L: InputLines,
    E: LedEngine,
    D: DisplaySink,
    N: NameLookup,
    S: ConfigStore,
{
    /// Load the stored values, push them to the engine and draw the first
    /// frame.
    pub fn new(
        settings: &Settings,
        lines: L,
        mut led: E,
        mut display: D,
        names: N,
        mut store: S,
        now_ms: u64,
    ) -> Result<Self, Error> {
        if settings.columns as usize > MAX_COLUMNS {
            return Err(Error::DisplayTooWide);
        }

        let initial = initial_snapshot(&mut store, settings.defaults);
        let registry = ValueRegistry::from_settings(settings, initial)?;
        registry.publish_all(&mut led, CallMode::DirectChange);

        let menu = MenuController::new(settings, now_ms);
        let mut renderer = DisplayRenderer::new(settings.columns, settings.rows);
        renderer.set_awake(&mut display, menu.is_awake());
        renderer.render(&mut display, &names, menu.focus(), &registry);

        // Start values are never written back until the user changes one.
        let gate = PersistenceGate::new(registry.snapshot(), now_ms, settings.quiet_interval_ms);

        #[cfg(feature = "defmt")]
        defmt::info!("Panel: started with {}", registry.snapshot());

        Ok(Self {
            sampler: InputSampler::new(lines, settings.polarity, settings.debounce_ms),
            menu,
            registry,
            renderer,
            gate,
            led,
            display,
            names,
            store,
        })
    }

    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let event = self.sampler.poll(now_ms);
        let action = self
            .menu
            .handle(now_ms, event, &mut self.registry, &mut self.led);
        let slept = self.menu.check_inactivity(now_ms);

        self.renderer.set_awake(&mut self.display, self.menu.is_awake());
        let redrawn = self.renderer.render(
            &mut self.display,
            &self.names,
            self.menu.focus(),
            &self.registry,
        );

        let save = self
            .gate
            .tick(now_ms, self.registry.snapshot(), &mut self.store);

        TickReport {
            action,
            slept,
            redrawn,
            save,
        }
    }

    pub fn focus(&self) -> MenuFocus {
        self.menu.focus()
    }

    pub fn is_awake(&self) -> bool {
        self.menu.is_awake()
    }

    pub fn registry(&self) -> &ValueRegistry {
        &self.registry
    }

    pub fn gate(&self) -> &PersistenceGate {
        &self.gate
    }

    pub fn lines_mut(&mut self) -> &mut L {
        self.sampler.lines_mut()
    }

    pub fn led(&self) -> &E {
        &self.led
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
