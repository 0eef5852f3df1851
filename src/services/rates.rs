//! Exchange-rate service
//!
//! Manages the cached rate snapshot the rest of the application reads. Rates
//! are supplied manually (or by an external feed writing the same file); this
//! service never performs network I/O itself.

use chrono::Duration;

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{Currency, ExchangeRateTable};
use crate::storage::Storage;

/// Snapshots older than this are reported as stale
const STALE_AFTER_HOURS: i64 = 24;

/// Service for exchange-rate management
pub struct RateService<'a> {
    storage: &'a Storage,
}

impl<'a> RateService<'a> {
    /// Create a new rate service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> RelocateResult<ExchangeRateTable> {
        self.storage.rates.snapshot()
    }

    /// Set the rate for a single currency (units per 1 EUR)
    pub fn set_rate(&self, currency: Currency, rate: f64) -> RelocateResult<ExchangeRateTable> {
        if currency.is_pivot() {
            return Err(RelocateError::Validation(
                "The pivot currency (EUR) always has rate 1.0".to_string(),
            ));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RelocateError::Validation(format!(
                "Rate must be a positive number, got {}",
                rate
            )));
        }

        let before = self.storage.rates.snapshot()?;
        self.storage.rates.set_rate(currency, rate)?;
        self.storage.rates.save()?;

        let after = self.storage.rates.snapshot()?;
        self.storage
            .log_update(EntityType::RateTable, "rates", None, &before, &after)?;

        Ok(after)
    }

    /// Replace the whole snapshot, stamping it now
    pub fn set_table(
        &self,
        pairs: impl IntoIterator<Item = (Currency, f64)>,
    ) -> RelocateResult<ExchangeRateTable> {
        let table = ExchangeRateTable::from_rates(pairs);

        let before = self.storage.rates.snapshot()?;
        self.storage.rates.set_table(table)?;
        self.storage.rates.save()?;

        let after = self.storage.rates.snapshot()?;
        self.storage
            .log_update(EntityType::RateTable, "rates", None, &before, &after)?;

        Ok(after)
    }

    /// Whether the snapshot is missing, unstamped, or older than a day
    ///
    /// Staleness only affects what the CLI warns about; conversions keep
    /// using the last-known table either way.
    pub fn is_stale(&self) -> RelocateResult<bool> {
        let table = self.storage.rates.snapshot()?;
        Ok(match table.age() {
            Some(age) => age > Duration::hours(STALE_AFTER_HOURS),
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_rate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RateService::new(&storage);

        let table = service.set_rate(Currency::Usd, 1.086).unwrap();
        assert_eq!(table.rate(Currency::Usd), Some(1.086));
        assert!(!service.is_stale().unwrap());
    }

    #[test]
    fn test_set_rate_rejects_pivot_and_bad_values() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RateService::new(&storage);

        assert!(service.set_rate(Currency::Eur, 1.0).unwrap_err().is_validation());
        assert!(service.set_rate(Currency::Usd, 0.0).unwrap_err().is_validation());
        assert!(service
            .set_rate(Currency::Usd, f64::NAN)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_empty_snapshot_is_stale() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RateService::new(&storage);

        assert!(service.is_stale().unwrap());
    }

    #[test]
    fn test_set_table() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RateService::new(&storage);

        let table = service
            .set_table([(Currency::Usd, 1.086), (Currency::Brl, 5.4)])
            .unwrap();
        assert_eq!(table.rate(Currency::Brl), Some(5.4));
    }
}
