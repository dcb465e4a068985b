//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field names follow the camelCase wire convention.

use chrono::NaiveDate;
use serde::Deserialize;
use simmas_core::value_objects::{ProgramStatus, Role};
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Defaults to `siswa` when omitted
    pub role: Option<Role>,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

/// Update own profile request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// User Administration Requests
// ============================================================================

/// Create user request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    pub role: Role,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// Update user request (admin)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub role: Option<Role>,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub verified: Option<bool>,
}

// ============================================================================
// DUDI Requests
// ============================================================================

/// Register a partner company
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDudiRequest {
    #[validate(length(min = 1, max = 200, message = "Company name must be 1-200 characters"))]
    pub company_name: String,

    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub address: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Contact person must be 1-100 characters"))]
    pub contact_person: String,

    #[validate(length(max = 100, message = "Business field must be at most 100 characters"))]
    pub business_field: Option<String>,

    #[validate(range(min = 0, message = "Student quota must not be negative"))]
    pub student_quota: Option<i32>,

    pub active: Option<bool>,
}

/// Update a partner company
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDudiRequest {
    #[validate(length(min = 1, max = 200, message = "Company name must be 1-200 characters"))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "Contact person must be at most 100 characters"))]
    pub contact_person: Option<String>,

    #[validate(length(max = 100, message = "Business field must be at most 100 characters"))]
    pub business_field: Option<String>,

    #[validate(range(min = 0, message = "Student quota must not be negative"))]
    pub student_quota: Option<i32>,

    pub active: Option<bool>,
}

// ============================================================================
// Periode Requests
// ============================================================================

/// Create an internship period
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodeRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Academic year must be 1-20 characters"))]
    pub academic_year: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Defaults to `draft` when omitted
    pub status: Option<ProgramStatus>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Target students must not be negative"))]
    pub target_students: Option<i32>,
}

/// Update an internship period
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeriodeRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Academic year must be 1-20 characters"))]
    pub academic_year: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub status: Option<ProgramStatus>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Target students must not be negative"))]
    pub target_students: Option<i32>,
}

/// Query parameters for the period listing
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodeListQuery {
    pub search: Option<String>,
    pub status: Option<ProgramStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

// ============================================================================
// Batch Requests
// ============================================================================

/// Create a batch inside a period
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchRequest {
    pub periode_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Semester must be 1-50 characters"))]
    pub semester: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Defaults to `draft` when omitted
    pub status: Option<ProgramStatus>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Student quota must not be negative"))]
    pub student_quota: Option<i32>,
}

/// Update a batch
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatchRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Semester must be 1-50 characters"))]
    pub semester: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub status: Option<ProgramStatus>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Student quota must not be negative"))]
    pub student_quota: Option<i32>,
}

/// Query parameters for the batch listing
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchListQuery {
    pub search: Option<String>,
    pub status: Option<ProgramStatus>,
    pub periode_id: Option<Uuid>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
