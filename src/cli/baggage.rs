//! Baggage CLI commands

use clap::Subcommand;

use crate::display::checklist::{format_baggage_list, format_baggage_progress};
use crate::error::{RelocateError, RelocateResult};
use crate::models::BaggageItem;
use crate::services::BaggageService;
use crate::storage::Storage;

/// Baggage subcommands
#[derive(Subcommand)]
pub enum BaggageCommands {
    /// Add an item to the baggage checklist
    Add {
        /// Item name
        name: String,
        /// Category (clothing, electronics, kitchen, paperwork, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Quantity
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List baggage items
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Mark an item as packed
    Pack {
        /// Item name or ID
        item: String,
    },
    /// Mark an item as not packed
    Unpack {
        /// Item name or ID
        item: String,
    },
    /// Delete an item from the checklist
    Delete {
        /// Item name or ID
        item: String,
    },
}

/// Handle a baggage command
pub fn handle_baggage_command(storage: &Storage, cmd: BaggageCommands) -> RelocateResult<()> {
    let service = BaggageService::new(storage);

    match cmd {
        BaggageCommands::Add {
            name,
            category,
            quantity,
        } => {
            let category = category.parse().map_err(RelocateError::Validation)?;
            let item = service.create(name, category, quantity)?;
            println!("Added {}", item);
            println!("  ID: {}", item.id);
        }

        BaggageCommands::List { category } => {
            let category = category
                .as_deref()
                .map(|c| c.parse().map_err(RelocateError::Validation))
                .transpose()?;
            let items = service.list(category)?;
            print!("{}", format_baggage_list(&items));
            if category.is_none() && !items.is_empty() {
                print!("{}", format_baggage_progress(&service.progress()?));
            }
        }

        BaggageCommands::Pack { item } => {
            let found = resolve_item(&service, &item)?;
            service.set_packed(found.id, true)?;
            println!("Packed {}", found.name);
        }

        BaggageCommands::Unpack { item } => {
            let found = resolve_item(&service, &item)?;
            service.set_packed(found.id, false)?;
            println!("Unpacked {}", found.name);
        }

        BaggageCommands::Delete { item } => {
            let found = resolve_item(&service, &item)?;
            service.delete(found.id)?;
            println!("Deleted {}", found.name);
        }
    }

    Ok(())
}

/// Resolve a baggage item by full UUID, short display ID, or name
fn resolve_item(service: &BaggageService, input: &str) -> RelocateResult<BaggageItem> {
    if let Ok(id) = input.parse() {
        if let Ok(item) = service.get(id) {
            return Ok(item);
        }
    }

    let items = service.list(None)?;
    items
        .into_iter()
        .find(|i| i.id.to_string() == input || i.name.eq_ignore_ascii_case(input))
        .ok_or_else(|| RelocateError::baggage_item_not_found(input))
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
    fn test_add_pack_unpack() {
        let (_temp_dir, storage) = create_test_storage();

        handle_baggage_command(
            &storage,
            BaggageCommands::Add {
                name: "Laptop".to_string(),
                category: "electronics".to_string(),
                quantity: 1,
            },
        )
        .unwrap();

        handle_baggage_command(
            &storage,
            BaggageCommands::Pack {
                item: "laptop".to_string(),
            },
        )
        .unwrap();

        let service = BaggageService::new(&storage);
        assert_eq!(service.progress().unwrap().packed, 1);

        handle_baggage_command(
            &storage,
            BaggageCommands::Unpack {
                item: "Laptop".to_string(),
            },
        )
        .unwrap();
        assert_eq!(service.progress().unwrap().packed, 0);
    }
}
