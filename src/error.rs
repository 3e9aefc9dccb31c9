//! Unified error type for rotary-panel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Catalogs
    /// An effect or palette catalog description is inconsistent.
    Domain(DomainError),

    // Storage
    /// Flash read failed.
    StorageRead,

    /// Flash write/erase failed; the record was not persisted.
    StorageWrite,

    /// Stored data could not be decoded.
    StorageCorrupt,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    /// Configured display width exceeds `layout::MAX_COLUMNS`.
    DisplayTooWide,
}

/// Reasons an index catalog cannot be turned into an `IndexDomain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainError {
    /// The catalog has no entries.
    EmptyCatalog,
    /// The wrap target lies outside `[0, count)`.
    WrapStartOutOfRange,
    /// The wrap target is itself a banned entry.
    WrapStartBanned,
    /// More banned entries than `config::MAX_BANNED`.
    TooManyBanned,
}

// Convenience conversions

impl From<DomainError> for Error {
    fn from(e: DomainError) -> Self {
        Error::Domain(e)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::EmptyCatalog => write!(f, "catalog has no entries"),
            DomainError::WrapStartOutOfRange => write!(f, "wrap start outside the catalog"),
            DomainError::WrapStartBanned => write!(f, "wrap start is a banned entry"),
            DomainError::TooManyBanned => write!(f, "too many banned entries"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(e) => write!(f, "invalid catalog: {}", e),
            Error::StorageRead => write!(f, "flash read failed"),
            Error::StorageWrite => write!(f, "flash write failed"),
            Error::StorageCorrupt => write!(f, "stored settings are corrupt"),
            Error::Display => write!(f, "display transaction failed"),
            Error::DisplayTooWide => write!(f, "display wider than the text buffer"),
        }
    }
}
