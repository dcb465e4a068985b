//! User roles for the internship management system
//!
//! Three fixed roles: `admin` (staff), `guru` (supervising teacher), and
//! `siswa` (student intern). Stored as TEXT in the database and serialized
//! in lowercase in JSON and JWT claims.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guru,
    Siswa,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Guru, Role::Siswa];

    /// Database / JSON representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guru => "guru",
            Self::Siswa => "siswa",
        }
    }

    /// Check if this is the admin role
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "guru" => Ok(Self::Guru),
            "siswa" => Ok(Self::Siswa),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

bitflags! {
    /// A set of roles, used as the normalized form of the permission table
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RoleSet: u8 {
        const ADMIN = 1 << 0;
        const GURU  = 1 << 1;
        const SISWA = 1 << 2;
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleSet::ADMIN,
            Role::Guru => RoleSet::GURU,
            Role::Siswa => RoleSet::SISWA,
        }
    }
}

impl RoleSet {
    /// Build a set from a slice of roles
    #[must_use]
    pub fn from_roles(roles: &[Role]) -> Self {
        roles
            .iter()
            .fold(RoleSet::empty(), |set, role| set | RoleSet::from(*role))
    }

    /// Check whether a role is a member of the set
    #[inline]
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.contains(RoleSet::from(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_unknown() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, RoleParseError("superuser".to_string()));
    }

    #[test]
    fn test_role_json_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Guru).unwrap(), "\"guru\"");
        let parsed: Role = serde_json::from_str("\"siswa\"").unwrap();
        assert_eq!(parsed, Role::Siswa);
    }

    #[test]
    fn test_role_set_membership() {
        let set = RoleSet::from_roles(&[Role::Admin, Role::Guru]);
        assert!(set.allows(Role::Admin));
        assert!(set.allows(Role::Guru));
        assert!(!set.allows(Role::Siswa));
    }

    #[test]
    fn test_empty_role_set_allows_nobody() {
        let set = RoleSet::empty();
        for role in Role::ALL {
            assert!(!set.allows(role));
        }
    }
}
