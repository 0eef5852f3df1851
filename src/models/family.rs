//! Family member model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::FamilyMemberId;

/// Relationship of a family member to the primary applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The primary applicant themselves
    #[default]
    Applicant,
    Spouse,
    Child,
    Parent,
    Other,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applicant => write!(f, "Applicant"),
            Self::Spouse => write!(f, "Spouse"),
            Self::Child => write!(f, "Child"),
            Self::Parent => write!(f, "Parent"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applicant" | "self" => Ok(Self::Applicant),
            "spouse" => Ok(Self::Spouse),
            "child" => Ok(Self::Child),
            "parent" => Ok(Self::Parent),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown relationship: {}", other)),
        }
    }
}

/// A family member travelling on the same move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Unique identifier
    pub id: FamilyMemberId,

    /// Full name
    pub name: String,

    /// Relationship to the primary applicant
    #[serde(default)]
    pub relationship: Relationship,

    /// Optional birth date
    pub birth_date: Option<NaiveDate>,

    /// Optional passport number
    pub passport_number: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl FamilyMember {
    /// Create a new family member
    pub fn new(name: impl Into<String>, relationship: Relationship) -> Self {
        Self {
            id: FamilyMemberId::new(),
            name: name.into(),
            relationship,
            birth_date: None,
            passport_number: None,
            created_at: Utc::now(),
        }
    }

    /// Validate the member's user-editable fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Family member name must not be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for FamilyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.relationship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = FamilyMember::new("Ana", Relationship::Spouse);
        assert_eq!(member.relationship, Relationship::Spouse);
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_relationship_parsing() {
        assert_eq!(
            "self".parse::<Relationship>().unwrap(),
            Relationship::Applicant
        );
        assert_eq!("SPOUSE".parse::<Relationship>().unwrap(), Relationship::Spouse);
        assert!("cousin".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut member = FamilyMember::new("Ana", Relationship::Spouse);
        member.passport_number = Some("FD123456".to_string());

        let json = serde_json::to_string(&member).unwrap();
        let loaded: FamilyMember = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, member.id);
        assert_eq!(loaded.passport_number.as_deref(), Some("FD123456"));
    }
}
