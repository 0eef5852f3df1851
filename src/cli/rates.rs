//! Exchange-rate CLI commands

use clap::Subcommand;

use crate::error::{RelocateError, RelocateResult};
use crate::models::Currency;
use crate::services::RateService;
use crate::storage::Storage;

/// Rates subcommands
#[derive(Subcommand)]
pub enum RatesCommands {
    /// Show the current exchange-rate snapshot
    Show,
    /// Set the rate for one currency (units per 1 EUR)
    Set {
        /// Currency to set (BRL, USD)
        currency: Currency,
        /// Units of the currency per 1 EUR
        rate: f64,
    },
    /// Replace the whole snapshot in one go
    Update {
        /// BRL per 1 EUR
        #[arg(long)]
        brl: f64,
        /// USD per 1 EUR
        #[arg(long)]
        usd: f64,
    },
}

/// Handle a rates command
pub fn handle_rates_command(storage: &Storage, cmd: RatesCommands) -> RelocateResult<()> {
    let service = RateService::new(storage);

    match cmd {
        RatesCommands::Show => {
            let table = service.snapshot()?;
            if table.is_empty() {
                println!("No exchange rates set. Use `relocate rates set` to add them.");
                return Ok(());
            }

            println!("Rates per 1 {}:", Currency::PIVOT.code());
            for currency in Currency::ALL {
                if currency.is_pivot() {
                    continue;
                }
                match table.rate(currency) {
                    Some(rate) => println!("  {}: {:.4}", currency, rate),
                    None => println!("  {}: not set", currency),
                }
            }
            match table.fetched_at {
                Some(at) => {
                    let marker = if service.is_stale()? { " (stale)" } else { "" };
                    println!("Updated: {}{}", at.format("%Y-%m-%d %H:%M UTC"), marker);
                }
                None => println!("Updated: never"),
            }
        }

        RatesCommands::Set { currency, rate } => {
            service.set_rate(currency, rate)?;
            println!("Set {} = {:.4} per 1 EUR", currency, rate);
        }

        RatesCommands::Update { brl, usd } => {
            for (name, rate) in [("brl", brl), ("usd", usd)] {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(RelocateError::Validation(format!(
                        "Rate for {} must be a positive number",
                        name
                    )));
                }
            }
            service.set_table([(Currency::Brl, brl), (Currency::Usd, usd)])?;
            println!("Updated rates: BRL {:.4}, USD {:.4} per 1 EUR", brl, usd);
        }
    }

    Ok(())
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
    fn test_set_and_update() {
        let (_temp_dir, storage) = create_test_storage();

        handle_rates_command(
            &storage,
            RatesCommands::Set {
                currency: Currency::Usd,
                rate: 1.086,
            },
        )
        .unwrap();
        assert_eq!(
            storage.rates.snapshot().unwrap().rate(Currency::Usd),
            Some(1.086)
        );

        handle_rates_command(&storage, RatesCommands::Update { brl: 5.4, usd: 1.1 }).unwrap();
        let table = storage.rates.snapshot().unwrap();
        assert_eq!(table.rate(Currency::Brl), Some(5.4));
        assert_eq!(table.rate(Currency::Usd), Some(1.1));
    }

    #[test]
    fn test_update_rejects_bad_rate() {
        let (_temp_dir, storage) = create_test_storage();
        let err =
            handle_rates_command(&storage, RatesCommands::Update { brl: -1.0, usd: 1.1 })
                .unwrap_err();
        assert!(err.is_validation());
    }
}
