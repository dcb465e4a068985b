//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. All wire types
//! mirror the API's camelCase DTOs.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Success envelope wrapper
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: Option<String>,
}

/// Failure envelope wrapper
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            role: None,
            first_name: Some("Test".to_string()),
            last_name: Some(format!("User{suffix}")),
            phone: None,
        }
    }

    pub fn unique_with_role(role: &str) -> Self {
        let mut request = Self::unique();
        request.role = Some(role.to_string());
        request
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response body (`data` field of login/register)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
}

/// Refresh response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Active session response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    #[serde(default)]
    pub device_info: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
}

/// Change password request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Profile update request
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Create company (DUDI) request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDudiRequest {
    pub company_name: String,
    pub address: String,
    pub contact_person: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_quota: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CreateDudiRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            company_name: format!("PT Testing {suffix}"),
            address: "Jl. Industri No. 1".to_string(),
            contact_person: "Budi Santoso".to_string(),
            phone: Some("081234567890".to_string()),
            email: Some(format!("hrd{suffix}@example.co.id")),
            business_field: Some("Software".to_string()),
            student_quota: Some(5),
            active: None,
        }
    }
}

/// Create internship period request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodeRequest {
    pub name: String,
    pub academic_year: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_students: Option<i32>,
}

impl CreatePeriodeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Gelombang {suffix}"),
            // Academic years must be unique among live periods
            academic_year: format!("ta{suffix}/{}", suffix + 1),
            start_date: "2026-01-05".to_string(),
            end_date: "2026-06-30".to_string(),
            status: None,
            description: None,
            target_students: Some(40),
        }
    }
}

/// Internship period response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodeResponse {
    pub id: String,
    pub name: String,
    pub academic_year: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_students: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create batch request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchRequest {
    pub periode_id: String,
    pub name: String,
    pub semester: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_quota: Option<i32>,
}

impl CreateBatchRequest {
    pub fn unique(periode_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            periode_id: periode_id.to_string(),
            name: format!("Batch {suffix}"),
            semester: "Ganjil".to_string(),
            start_date: "2026-01-05".to_string(),
            end_date: "2026-06-30".to_string(),
            status: None,
            description: None,
            student_quota: Some(20),
        }
    }
}

/// Batch response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub id: String,
    pub periode_id: String,
    pub name: String,
    pub semester: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub student_quota: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Company response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DudiResponse {
    pub id: String,
    pub company_name: String,
    pub address: String,
    pub contact_person: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub business_field: Option<String>,
    #[serde(default)]
    pub student_quota: Option<i32>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}
