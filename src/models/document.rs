//! Document model
//!
//! Tracks the paperwork required for the move: what kind of document it is,
//! whether it is in hand, and when it expires.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::DocumentId;

/// Kind of document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Passport,
    Visa,
    BirthCertificate,
    Apostille,
    Translation,
    #[default]
    Other,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passport => write!(f, "Passport"),
            Self::Visa => write!(f, "Visa"),
            Self::BirthCertificate => write!(f, "Birth certificate"),
            Self::Apostille => write!(f, "Apostille"),
            Self::Translation => write!(f, "Translation"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "passport" => Ok(Self::Passport),
            "visa" => Ok(Self::Visa),
            "birth_certificate" => Ok(Self::BirthCertificate),
            "apostille" => Ok(Self::Apostille),
            "translation" => Ok(Self::Translation),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown document kind: {}", other)),
        }
    }
}

/// Acquisition status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Not yet requested
    #[default]
    Missing,
    /// Requested from the issuing authority
    Requested,
    /// Physically or digitally in hand
    InHand,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing"),
            Self::Requested => write!(f, "Requested"),
            Self::InHand => write!(f, "In hand"),
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "missing" => Ok(Self::Missing),
            "requested" => Ok(Self::Requested),
            "in_hand" | "inhand" => Ok(Self::InHand),
            other => Err(format!("Unknown document status: {}", other)),
        }
    }
}

/// A tracked document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Name (e.g., "Ana's passport")
    pub name: String,

    /// Kind of document
    #[serde(default)]
    pub kind: DocumentKind,

    /// Acquisition status
    #[serde(default)]
    pub status: DocumentStatus,

    /// Optional expiry date
    pub expires_on: Option<NaiveDate>,

    /// Optional opaque reference (file path, URL, protocol number)
    pub reference: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document record
    pub fn new(name: impl Into<String>, kind: DocumentKind) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::new(),
            name: name.into(),
            kind,
            status: DocumentStatus::Missing,
            expires_on: None,
            reference: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the status, touching the modification timestamp
    pub fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Check whether the document is in hand
    pub fn is_in_hand(&self) -> bool {
        self.status == DocumentStatus::InHand
    }

    /// Check whether the document is expired as of the given date
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|exp| exp < today)
    }

    /// Validate the document's user-editable fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Document name must not be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.kind, self.status)
    }
}
