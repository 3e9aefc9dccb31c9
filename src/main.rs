//! rotary-panel firmware - nRF52840.
//!
//! One embassy task drives the whole panel from a 2 ms ticker: sample the
//! encoder, update the menu and the LED engine, redraw the OLED and save
//! changed values to flash after a quiet period.
//!
//! Hardware:
//!   - Rotary encoder with push-button on P0.11 / P0.12 / P0.24
//!   - SSD1306 128×64 OLED on I²C (TWIM0, P0.26 SDA / P0.27 SCL)
//!   - Settings in internal flash via the NVMC

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use rotary_panel::config::{self, Settings};
use rotary_panel::input::pins::EncoderPins;
use rotary_panel::led::{CallMode, LedEngine};
use rotary_panel::panel::Panel;
use rotary_panel::storage::flash::FlashConfigStore;
use rotary_panel::storage::SaveOutcome;
use rotary_panel::ui::display::OledDisplay;
use rotary_panel::ui::StaticNames;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Stand-in for the LED engine: logs every update over RTT.
struct LoggingLed;

impl LedEngine for LoggingLed {
    fn set_effect(&mut self, index: u16) {
        info!("LED: effect {}", index);
    }

    fn set_palette(&mut self, index: u16) {
        info!("LED: palette {}", index);
    }

    fn set_brightness(&mut self, value: u8) {
        info!("LED: brightness {}", value);
    }

    fn set_speed(&mut self, value: u8) {
        info!("LED: speed {}", value);
    }

    fn set_intensity(&mut self, value: u8) {
        info!("LED: intensity {}", value);
    }

    fn restart_animation(&mut self) {
        info!("LED: restart animation");
    }

    fn notify_color_updated(&mut self, mode: CallMode) {
        info!("LED: colour updated ({})", mode);
    }

    fn notify_state_updated(&mut self, mode: CallMode) {
        info!("LED: state updated ({})", mode);
    }

    fn notify_interfaces_updated(&mut self, mode: CallMode) {
        info!("LED: interfaces updated ({})", mode);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("rotary-panel starting...");

    let p = embassy_nrf::init(Default::default());

    let lines = EncoderPins::new(p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade());

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    // Flash-resident write data is copied through this buffer before DMA.
    let mut twim_buffer = [0u8; 32];
    let i2c = twim::Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_26,
        p.P0_27,
        i2c_config,
        &mut twim_buffer,
    );
    let display = OledDisplay::new(i2c);

    let store = FlashConfigStore::new(Nvmc::new(p.NVMC));

    let settings = Settings::default();
    let start = Instant::now().as_millis();
    let mut panel = unwrap!(Panel::new(
        &settings,
        lines,
        LoggingLed,
        display,
        StaticNames::empty(),
        store,
        start,
    ));
    info!("Panel ready, focus {}", panel.focus());

    let mut ticker = Ticker::every(Duration::from_millis(config::TICK_MS));
    loop {
        let report = panel.tick(Instant::now().as_millis());
        if let SaveOutcome::Failed(e) = report.save {
            warn!("Settings not saved ({}), retrying later", e);
        }
        if let Some(e) = panel.display_mut().fault() {
            warn!("{}", e);
        }
        ticker.next().await;
    }
}
