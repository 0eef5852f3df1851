//! Checklist display formatting
//!
//! Formats the document and baggage checklists, plus the family roster.

use chrono::NaiveDate;

use crate::models::{BaggageItem, Document, DocumentStatus, FamilyMember};
use crate::services::{BaggageProgress, DocumentProgress};

/// Badge for a document's acquisition status
pub fn document_badge(doc: &Document, today: NaiveDate) -> &'static str {
    if doc.is_expired(today) {
        return "[!]";
    }
    match doc.status {
        DocumentStatus::Missing => "[ ]",
        DocumentStatus::Requested => "[~]",
        DocumentStatus::InHand => "[x]",
    }
}

/// Format the document checklist
pub fn format_document_list(docs: &[Document], today: NaiveDate) -> String {
    if docs.is_empty() {
        return "No documents found.".to_string();
    }

    let name_width = docs.iter().map(|d| d.name.len()).max().unwrap_or(4).max(4);
    let kind_width = docs
        .iter()
        .map(|d| d.kind.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:<name_width$}  {:<kind_width$}  {:<10}  {:<12}  {}\n",
        "", "Name", "Kind", "Expires", "Status", "ID",
    ));
    output.push_str(&format!(
        "{:-<5}  {:-<name_width$}  {:-<kind_width$}  {:-<10}  {:-<12}  {:-<12}\n",
        "", "", "", "", "", "",
    ));

    for doc in docs {
        let expires = doc
            .expires_on
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<5}  {:<name_width$}  {:<kind_width$}  {:<10}  {:<12}  {}\n",
            document_badge(doc, today),
            doc.name,
            doc.kind.to_string(),
            expires,
            doc.status.to_string(),
            doc.id,
        ));
    }

    output
}

/// Format the document progress line for the summary view
pub fn format_document_progress(progress: &DocumentProgress) -> String {
    let mut line = format!(
        "Documents: {}/{} in hand, {} requested",
        progress.in_hand, progress.total, progress.requested
    );
    if progress.expired > 0 {
        line.push_str(&format!(", {} expired", progress.expired));
    }
    line.push('\n');
    line
}

/// Format the baggage checklist
pub fn format_baggage_list(items: &[BaggageItem]) -> String {
    if items.is_empty() {
        return "No baggage items found.".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!("{}  {}\n", item, item.id));
    }
    output
}

/// Format the baggage progress line for the summary view
pub fn format_baggage_progress(progress: &BaggageProgress) -> String {
    format!("Baggage: {}/{} packed\n", progress.packed, progress.total)
}

/// Format the family roster
pub fn format_family_list(members: &[FamilyMember]) -> String {
    if members.is_empty() {
        return "No family members found.".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:<12}  {:<12}  {}\n",
        "Name", "Relation", "Born", "Passport", "ID",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<12}  {:-<12}  {:-<12}  {:-<12}\n",
        "", "", "", "", "",
    ));

    for member in members {
        let born = member
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let passport = member.passport_number.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "{:<name_width$}  {:<12}  {:<12}  {:<12}  {}\n",
            member.name,
            member.relationship.to_string(),
            born,
            passport,
            member.id,
        ));
    }

    output
}
