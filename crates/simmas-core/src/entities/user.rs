//! User entity - an account in the internship management system

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Role;

/// Canonical form of an email address: trimmed and lowercased
///
/// Every path that stores or looks up an email goes through this, so
/// `Alice@Example.COM ` and `alice@example.com` always hit the same row.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A user account
///
/// The password hash never lives on the entity; it is read and written
/// through the repository only. Soft-deleted users are filtered out at the
/// repository layer, so an entity in hand always refers to a live account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with required fields
    #[must_use]
    pub fn new(id: Uuid, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: normalize_email(&email),
            role,
            first_name: None,
            last_name: None,
            phone: None,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name: "First Last", falling back to whichever part exists,
    /// then to the email address
    #[must_use]
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }

    /// Apply a profile update, bumping `updated_at`
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
    ) {
        if let Some(first) = first_name {
            self.first_name = Some(first);
        }
        if let Some(last) = last_name {
            self.last_name = Some(last);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        self.updated_at = Utc::now();
    }
}
