//! Lifecycle status shared by internship periods and batches
//!
//! Stored as TEXT in the database and serialized in lowercase in JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lifecycle status of a period or batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Draft,
    Active,
    Completed,
}

impl ProgramStatus {
    /// All statuses, in declaration order
    pub const ALL: [ProgramStatus; 3] = [
        ProgramStatus::Draft,
        ProgramStatus::Active,
        ProgramStatus::Completed,
    ];

    /// Database / JSON representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl Default for ProgramStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown status: {0}")]
pub struct StatusParseError(pub String);

impl FromStr for ProgramStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in ProgramStatus::ALL {
            assert_eq!(status.as_str().parse::<ProgramStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_unknown() {
        let err = "archived".parse::<ProgramStatus>().unwrap_err();
        assert_eq!(err, StatusParseError("archived".to_string()));
    }

    #[test]
    fn test_status_json_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProgramStatus::Active).unwrap(),
            "\"active\""
        );
        let parsed: ProgramStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(parsed, ProgramStatus::Draft);
    }
}
