//! Family CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::checklist::format_family_list;
use crate::error::{RelocateError, RelocateResult};
use crate::models::FamilyMember;
use crate::services::FamilyService;
use crate::storage::Storage;

/// Family subcommands
#[derive(Subcommand)]
pub enum FamilyCommands {
    /// Add a family member
    Add {
        /// Member name
        name: String,
        /// Relationship (applicant, spouse, child, parent, other)
        #[arg(short, long, default_value = "applicant")]
        relationship: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        born: Option<NaiveDate>,
        /// Passport number
        #[arg(short, long)]
        passport: Option<String>,
    },
    /// List family members
    List,
    /// Remove a family member
    Delete {
        /// Member name or ID
        member: String,
    },
}

/// Handle a family command
pub fn handle_family_command(storage: &Storage, cmd: FamilyCommands) -> RelocateResult<()> {
    let service = FamilyService::new(storage);

    match cmd {
        FamilyCommands::Add {
            name,
            relationship,
            born,
            passport,
        } => {
            let relationship = relationship.parse().map_err(RelocateError::Validation)?;
            let member = service.create(name, relationship, born, passport)?;
            println!("Added {} ({})", member.name, member.relationship);
            println!("  ID: {}", member.id);
        }

        FamilyCommands::List => {
            let members = service.list()?;
            print!("{}", format_family_list(&members));
        }

        FamilyCommands::Delete { member } => {
            let found = resolve_member(&service, &member)?;
            service.delete(found.id)?;
            println!("Removed {}", found.name);
        }
    }

    Ok(())
}

/// Resolve a family member by full UUID, short display ID, or name
fn resolve_member(service: &FamilyService, input: &str) -> RelocateResult<FamilyMember> {
    if let Ok(id) = input.parse() {
        if let Ok(member) = service.get(id) {
            return Ok(member);
        }
    }

    let members = service.list()?;
    members
        .into_iter()
        .find(|m| m.id.to_string() == input || m.name.eq_ignore_ascii_case(input))
        .ok_or_else(|| RelocateError::family_member_not_found(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use crate::models::Relationship;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_delete_by_name() {
        let (_temp_dir, storage) = create_test_storage();

        handle_family_command(
            &storage,
            FamilyCommands::Add {
                name: "Ana".to_string(),
                relationship: "spouse".to_string(),
                born: None,
                passport: None,
            },
        )
        .unwrap();

        let service = FamilyService::new(&storage);
        let members = service.list().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].relationship, Relationship::Spouse);

        handle_family_command(
            &storage,
            FamilyCommands::Delete {
                member: "ana".to_string(),
            },
        )
        .unwrap();
        assert!(service.list().unwrap().is_empty());
    }
}
