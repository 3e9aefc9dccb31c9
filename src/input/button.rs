//! Push-button debouncing.
//!
//! The switch is active-low with a pull-up. A press is reported on the
//! transition to the pressed level, and only when the debounce window has
//! passed since both the previous accepted press and the last release.
//! Holding the button never repeats; contact bounce after a press or a
//! release is swallowed by the window.

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug)]
pub struct ButtonDebouncer {
    was_pressed: bool,
    last_accept_ms: Option<u64>,
    last_release_ms: Option<u64>,
    window_ms: u64,
}

impl ButtonDebouncer {
    /// Create a new debouncer (not pressed).
    pub const fn new(window_ms: u64) -> Self {
        Self {
            was_pressed: false,
            last_accept_ms: None,
            last_release_ms: None,
            window_ms,
        }
    }

    /// Feed the current level. Returns `true` only for an accepted press.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> bool {
        let edge = pressed && !self.was_pressed;
        if !pressed && self.was_pressed {
            self.last_release_ms = Some(now_ms);
        }
        self.was_pressed = pressed;

        if !edge || self.settling(self.last_accept_ms, now_ms) {
            return false;
        }
        if self.settling(self.last_release_ms, now_ms) {
            return false;
        }

        self.last_accept_ms = Some(now_ms);
        true
    }

    fn settling(&self, since: Option<u64>, now_ms: u64) -> bool {
        since.is_some_and(|t| now_ms.saturating_sub(t) < self.window_ms)
    }

    /// Whether the button was down at the last update.
    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}
