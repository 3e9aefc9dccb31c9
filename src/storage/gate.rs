use super::ConfigStore;
use crate::error::Error;
use crate::params::Snapshot;

/// Result of one [`PersistenceGate::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SaveOutcome {
    /// Live values match the last saved record.
    Clean,
    /// Values changed but the quiet interval has not elapsed yet.
    Waiting,
    Saved,
    /// The store rejected the write; it is retried after the next interval.
    Failed(Error),
}

/// Coalesces value changes into occasional flash writes.
///
/// A write happens only when the live values differ from the last saved
/// record and more than `quiet_ms` passed since the last attempt.
pub struct PersistenceGate {
    saved: Snapshot,
    last_attempt_ms: u64,
    quiet_ms: u64,
}

impl PersistenceGate {
    /// `saved` is what the store holds (or the start values); `now_ms`
    /// starts the first quiet interval.
    pub fn new(saved: Snapshot, now_ms: u64, quiet_ms: u64) -> Self {
        Self {
            saved,
            last_attempt_ms: now_ms,
            quiet_ms,
        }
    }

    pub fn saved(&self) -> Snapshot {
        self.saved
    }

    pub fn is_dirty(&self, live: &Snapshot) -> bool {
        *live != self.saved
    }

    /// `true` if a write would happen on this tick.
    pub fn due(&self, now_ms: u64, live: &Snapshot) -> bool {
        self.is_dirty(live) && now_ms.saturating_sub(self.last_attempt_ms) > self.quiet_ms
    }

    pub fn tick<S: ConfigStore>(&mut self, now_ms: u64, live: Snapshot, store: &mut S) -> SaveOutcome {
        if !self.is_dirty(&live) {
            return SaveOutcome::Clean;
        }
        if !self.due(now_ms, &live) {
            return SaveOutcome::Waiting;
        }

        self.last_attempt_ms = now_ms;
        match store.save(&live) {
            Ok(()) => {
                self.saved = live;
                #[cfg(feature = "defmt")]
                defmt::info!("Storage: saved {}", live);
                SaveOutcome::Saved
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Storage: save failed ({})", e);
                SaveOutcome::Failed(e)
            }
        }
    }
}
