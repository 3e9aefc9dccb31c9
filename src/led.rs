//! Interface to the LED rendering engine.
//!
//! The engine itself (effects, palettes, pixel output) lives outside this
//! crate. The panel only pushes parameter values into it and raises the
//! notifications the engine uses to refresh its state and sync its other
//! interfaces.

/// How a change should be propagated by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallMode {
    /// Direct user change; the engine broadcasts it to its other interfaces.
    DirectChange,
    /// Local change from the knob; applied without network broadcast.
    Silent,
}

/// Write-only sink for parameter updates.
pub trait LedEngine {
    fn set_effect(&mut self, index: u16);
    fn set_palette(&mut self, index: u16);
    fn set_brightness(&mut self, value: u8);
    fn set_speed(&mut self, value: u8);
    fn set_intensity(&mut self, value: u8);

    /// Reset the per-run state of the current effect.
    fn restart_animation(&mut self);

    fn notify_color_updated(&mut self, mode: CallMode);
    fn notify_state_updated(&mut self, mode: CallMode);
    fn notify_interfaces_updated(&mut self, mode: CallMode);
}
