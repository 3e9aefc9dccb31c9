/// Decide whether the display should stay lit based on its current state
/// and the inactivity policy.
pub fn screen_should_be_on(
    awake: bool,
    auto_off_enabled: bool,
    idle_ms: u64,
    auto_off_timeout_ms: u64,
) -> bool {
    if !awake {
        return false;
    }

    if auto_off_enabled && idle_ms > auto_off_timeout_ms {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::screen_should_be_on;

    #[test]
    fn auto_off_after_timeout() {
        assert!(screen_should_be_on(true, true, 299_999, 300_000));
        assert!(screen_should_be_on(true, true, 300_000, 300_000));
        assert!(!screen_should_be_on(true, true, 300_001, 300_000));
    }

    #[test]
    fn auto_off_disabled_stays_on() {
        assert!(screen_should_be_on(true, false, 300_001, 300_000));
        assert!(screen_should_be_on(true, false, u64::MAX, 300_000));
    }

    #[test]
    fn asleep_stays_off() {
        assert!(!screen_should_be_on(false, true, 0, 300_000));
        assert!(!screen_should_be_on(false, false, 0, 300_000));
    }
}
