//! [`ConfigStore`] on the nRF52840 internal flash.
//!
//! Uses a `sequential-storage` map over a few reserved pages; it handles
//! wear levelling and garbage collection. The NVMC is blocking, so it is
//! wrapped in `BlockingAsync` and every operation runs to completion with
//! `block_on` inside the tick.

use core::ops::Range;

use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_futures::block_on;
use embedded_storage::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{fetch_item, store_item};

use super::{entries, ConfigStore, StoredConfig, KEY_BRIGHTNESS, KEY_EFFECT, KEY_INTENSITY, KEY_PALETTE, KEY_SPEED};
use crate::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use crate::error::Error;
use crate::params::Snapshot;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Scratch space for one map item (key + u16 + header).
const ITEM_BUFFER_SIZE: usize = 32;

const KEYS: [u8; 5] = [KEY_EFFECT, KEY_PALETTE, KEY_BRIGHTNESS, KEY_SPEED, KEY_INTENSITY];

pub struct FlashConfigStore<F> {
    flash: BlockingAsync<F>,
    range: Range<u32>,
}

impl<F: NorFlash> FlashConfigStore<F> {
    pub fn new(flash: F) -> Self {
        Self {
            flash: BlockingAsync::new(flash),
            range: STORAGE_START..STORAGE_END,
        }
    }

    async fn load_async(&mut self) -> Result<StoredConfig, Error> {
        let mut stored = StoredConfig::default();
        let mut buf = [0u8; ITEM_BUFFER_SIZE];

        for key in KEYS {
            let value = fetch_item::<u8, u16, _>(
                &mut self.flash,
                self.range.clone(),
                &mut NoCache::new(),
                &mut buf,
                &key,
            )
            .await
            .map_err(read_error)?;

            if let Some(value) = value {
                stored.set(key, value);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Flash: read {}", stored);
        Ok(stored)
    }

    async fn save_async(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        let mut buf = [0u8; ITEM_BUFFER_SIZE];

        for (key, value) in entries(snapshot) {
            store_item::<u8, u16, _>(
                &mut self.flash,
                self.range.clone(),
                &mut NoCache::new(),
                &mut buf,
                &key,
                &value,
            )
            .await
            .map_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::error!("Flash write error: {:?}", defmt::Debug2Format(&_e));
                Error::StorageWrite
            })?;
        }
        Ok(())
    }
}

impl<F: NorFlash> ConfigStore for FlashConfigStore<F> {
    fn load(&mut self) -> Result<StoredConfig, Error> {
        block_on(self.load_async())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        block_on(self.save_async(snapshot))
    }
}

fn read_error<E: core::fmt::Debug>(e: sequential_storage::Error<E>) -> Error {
    #[cfg(feature = "defmt")]
    defmt::error!("Flash read error: {:?}", defmt::Debug2Format(&e));
    match e {
        sequential_storage::Error::Corrupted { .. } => Error::StorageCorrupt,
        _ => Error::StorageRead,
    }
}
