//! Document CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::display::checklist::format_document_list;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{Document, DocumentStatus};
use crate::services::DocumentService;
use crate::storage::Storage;

/// Document subcommands
#[derive(Subcommand)]
pub enum DocumentCommands {
    /// Add a document to track
    Add {
        /// Document name
        name: String,
        /// Kind (passport, visa, birth_certificate, apostille, translation, other)
        #[arg(short, long, default_value = "other")]
        kind: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: Option<NaiveDate>,
        /// Reference number
        #[arg(short, long)]
        reference: Option<String>,
    },
    /// List documents
    List {
        /// Only show one status (missing, requested, in_hand)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Change a document's status
    SetStatus {
        /// Document name or ID
        document: String,
        /// New status (missing, requested, in_hand)
        status: String,
    },
    /// Delete a document record
    Delete {
        /// Document name or ID
        document: String,
    },
}

fn parse_status(raw: &str) -> RelocateResult<DocumentStatus> {
    raw.parse().map_err(RelocateError::Validation)
}

/// Handle a document command
pub fn handle_document_command(storage: &Storage, cmd: DocumentCommands) -> RelocateResult<()> {
    let service = DocumentService::new(storage);
    let today = Utc::now().date_naive();

    match cmd {
        DocumentCommands::Add {
            name,
            kind,
            expires,
            reference,
        } => {
            let kind = kind.parse().map_err(RelocateError::Validation)?;
            let doc = service.create(name, kind, expires, reference)?;
            println!("Added document: {} ({})", doc.name, doc.kind);
            println!("  Status: {}", doc.status);
            println!("  ID: {}", doc.id);
        }

        DocumentCommands::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let docs = service.list(status)?;
            print!("{}", format_document_list(&docs, today));
        }

        DocumentCommands::SetStatus { document, status } => {
            let status = parse_status(&status)?;
            let found = resolve_document(&service, &document)?;
            let updated = service.set_status(found.id, status)?;
            println!("{} is now {}", updated.name, updated.status);
        }

        DocumentCommands::Delete { document } => {
            let found = resolve_document(&service, &document)?;
            service.delete(found.id)?;
            println!("Deleted document: {}", found.name);
        }
    }

    Ok(())
}

/// Resolve a document by full UUID, short display ID, or name
fn resolve_document(service: &DocumentService, input: &str) -> RelocateResult<Document> {
    if let Ok(id) = input.parse() {
        if let Ok(doc) = service.get(id) {
            return Ok(doc);
        }
    }

    let docs = service.list(None)?;
    docs.into_iter()
        .find(|d| d.id.to_string() == input || d.name.eq_ignore_ascii_case(input))
        .ok_or_else(|| RelocateError::document_not_found(input))
}
