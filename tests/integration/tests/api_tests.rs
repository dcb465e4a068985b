//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_status, check_test_env, fixtures::*, refresh_cookie,
    refresh_set_cookie, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_returns_profile_and_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();

    let set_cookie = refresh_set_cookie(&response).expect("No refresh cookie set");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));

    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.email, request.email);
    // Role defaults to siswa when the request leaves it out
    assert_eq!(auth.user.role, "siswa");
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "CONFLICT")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_stores_email_in_canonical_form() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let suffix = unique_suffix();
    let mut request = RegisterRequest::unique();
    request.email = format!("MiXeD{suffix}@Example.COM");

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    let canonical = format!("mixed{suffix}@example.com");
    assert_eq!(auth.user.email, canonical);

    // The lowercase form logs in
    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: canonical,
                password: request.password.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A different casing of the same address is still a duplicate
    request.email = format!("mixed{suffix}@EXAMPLE.com");
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "CONFLICT")
        .await
        .unwrap();
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();

    assert!(refresh_cookie(&response).is_some());
    let auth: AuthResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_does_not_leak_user_existence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Wrong password for an existing account
    let wrong_password = LoginRequest {
        email: register_req.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server
        .post("/api/auth/login", &wrong_password)
        .await
        .unwrap();
    let existing = assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    // Unknown account entirely
    let unknown = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/auth/login", &unknown).await.unwrap();
    let missing = assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    // Both failures read identically
    assert_eq!(existing.error.message, missing.error.message);
    assert_eq!(existing.error.message, "Invalid email or password");
}

// ============================================================================
// Refresh Rotation Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_rotates_token_and_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let old_cookie = refresh_cookie(&response).expect("No refresh cookie set");
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Exchange the refresh token for a fresh access token
    let response = server
        .post_with_cookie("/api/auth/refresh", &old_cookie)
        .await
        .unwrap();
    let new_cookie = refresh_cookie(&response).expect("Refresh did not reset the cookie");
    let refreshed: RefreshResponse = assert_data(response, StatusCode::OK).await.unwrap();

    assert_ne!(refreshed.access_token, auth.access_token);
    assert_ne!(new_cookie, old_cookie);

    // The old token was revoked by the rotation
    let response = server
        .post_with_cookie("/api/auth/refresh", &old_cookie)
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();

    // The new one still works
    let response = server
        .post_with_cookie("/api/auth/refresh", &new_cookie)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/api/auth/refresh", &()).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();
}

// ============================================================================
// Logout Tests
// ============================================================================

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let cookie = refresh_cookie(&response).expect("No refresh cookie set");

    let response = server
        .post_with_cookie("/api/auth/logout", &cookie)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The revoked token can no longer refresh
    let response = server
        .post_with_cookie("/api/auth/refresh", &cookie)
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_is_fail_soft() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Garbage token still logs out successfully
    let response = server
        .post_with_cookie("/api/auth/logout", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // So does a logout with no cookie at all
    let response = server.post("/api/auth/logout", &()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout_all_revokes_every_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let first_cookie = refresh_cookie(&response).unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Second device
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let second_cookie = refresh_cookie(&response).unwrap();

    let response = server
        .post_auth("/api/auth/logout-all", &auth.access_token, &json!({}))
        .await
        .unwrap();
    let data: serde_json::Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(data["revokedSessions"].as_u64().unwrap() >= 2);

    for cookie in [first_cookie, second_cookie] {
        let response = server
            .post_with_cookie("/api/auth/refresh", &cookie)
            .await
            .unwrap();
        assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
            .await
            .unwrap();
    }
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/auth/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/auth/me").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateProfileRequest {
        first_name: Some("Siti".to_string()),
        phone: Some("081298765432".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/auth/me", &auth.access_token, &update)
        .await
        .unwrap();
    let user: UserResponse = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.first_name.as_deref(), Some("Siti"));
    assert_eq!(user.phone.as_deref(), Some("081298765432"));
    // Untouched fields survive
    assert_eq!(user.last_name, register_req.last_name);
}

#[tokio::test]
async fn test_change_password_revokes_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let cookie = refresh_cookie(&response).unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let change = ChangePasswordRequest {
        current_password: register_req.password.clone(),
        new_password: "EvenStronger456!".to_string(),
    };
    let response = server
        .post_auth("/api/auth/change-password", &auth.access_token, &change)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // All refresh tokens were revoked
    let response = server
        .post_with_cookie("/api/auth/refresh", &cookie)
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();

    // Old password no longer works, new one does
    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: register_req.email.clone(),
                password: "EvenStronger456!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Session Management Tests
// ============================================================================

#[tokio::test]
async fn test_list_and_revoke_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Second login creates a second session
    let login_req = LoginRequest::from_register(&register_req);
    server.post("/api/auth/login", &login_req).await.unwrap();

    let response = server
        .get_auth("/api/auth/sessions", &auth.access_token)
        .await
        .unwrap();
    let sessions: Vec<SessionResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(sessions.len() >= 2);

    // Revoke one of them
    let target = &sessions[0].id;
    let response = server
        .delete_auth(
            &format!("/api/auth/sessions/{target}"),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/auth/sessions", &auth.access_token)
        .await
        .unwrap();
    let remaining: Vec<SessionResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(remaining.len(), sessions.len() - 1);
    assert!(remaining.iter().all(|s| &s.id != target));
}

// ============================================================================
// User Management Tests
// ============================================================================

#[tokio::test]
async fn test_siswa_cannot_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/users", &auth.access_token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "MISSING_PERMISSIONS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_admin_manages_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(admin.user.role, "admin");

    // List includes the admin itself
    let response = server
        .get_auth("/api/users", &admin.access_token)
        .await
        .unwrap();
    let users: Vec<UserResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.id == admin.user.id));

    // Create a guru account
    let suffix = unique_suffix();
    let create = json!({
        "email": format!("guru{suffix}@example.com"),
        "password": "GuruPass123!",
        "role": "guru",
        "firstName": "Dewi",
        "lastName": "Lestari",
    });
    let response = server
        .post_auth("/api/users", &admin.access_token, &create)
        .await
        .unwrap();
    let guru: UserResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(guru.role, "guru");

    // Promote and verify the account
    let update = json!({ "role": "admin", "verified": true });
    let response = server
        .patch_auth(
            &format!("/api/users/{}", guru.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.role, "admin");
    assert!(updated.verified);

    // Soft delete
    let response = server
        .delete_auth(&format!("/api/users/{}", guru.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/users/{}", guru.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // A deleted account cannot log in
    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: format!("guru{suffix}@example.com"),
                password: "GuruPass123!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// DUDI Tests
// ============================================================================

#[tokio::test]
async fn test_dudi_crud_as_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create
    let create = CreateDudiRequest::unique();
    let response = server
        .post_auth("/api/dudi", &admin.access_token, &create)
        .await
        .unwrap();
    let dudi: DudiResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(dudi.company_name, create.company_name);

    // Duplicate company name conflicts
    let response = server
        .post_auth("/api/dudi", &admin.access_token, &create)
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "CONFLICT")
        .await
        .unwrap();

    // Read back
    let response = server
        .get_auth(&format!("/api/dudi/{}", dudi.id), &admin.access_token)
        .await
        .unwrap();
    let fetched: DudiResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, dudi.id);

    // Update
    let update = json!({ "address": "Jl. Baru No. 2", "studentQuota": 10 });
    let response = server
        .patch_auth(
            &format!("/api/dudi/{}", dudi.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: DudiResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.address, "Jl. Baru No. 2");
    assert_eq!(updated.student_quota, Some(10));

    // Delete
    let response = server
        .delete_auth(&format!("/api/dudi/{}", dudi.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/dudi/{}", dudi.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_siswa_can_view_but_not_create_dudi() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/dudi", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let create = CreateDudiRequest::unique();
    let response = server
        .post_auth("/api/dudi", &auth.access_token, &create)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "MISSING_PERMISSIONS")
        .await
        .unwrap();
}

// ============================================================================
// Periode Tests
// ============================================================================

#[tokio::test]
async fn test_periode_crud_as_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create
    let create = CreatePeriodeRequest::unique();
    let response = server
        .post_auth("/api/periode", &admin.access_token, &create)
        .await
        .unwrap();
    let periode: PeriodeResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(periode.academic_year, create.academic_year);
    // New periods start as drafts
    assert_eq!(periode.status, "draft");

    // The same academic year conflicts, regardless of casing
    let mut duplicate = CreatePeriodeRequest::unique();
    duplicate.academic_year = create.academic_year.to_uppercase();
    let response = server
        .post_auth("/api/periode", &admin.access_token, &duplicate)
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "CONFLICT")
        .await
        .unwrap();

    // Read back
    let response = server
        .get_auth(&format!("/api/periode/{}", periode.id), &admin.access_token)
        .await
        .unwrap();
    let fetched: PeriodeResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, periode.id);

    // Update
    let update = json!({ "status": "active", "targetStudents": 60 });
    let response = server
        .patch_auth(
            &format!("/api/periode/{}", periode.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: PeriodeResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "active");
    assert_eq!(updated.target_students, Some(60));

    // Delete
    let response = server
        .delete_auth(&format!("/api/periode/{}", periode.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/periode/{}", periode.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_periode_rejects_inverted_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let mut create = CreatePeriodeRequest::unique();
    create.start_date = "2026-06-30".to_string();
    create.end_date = "2026-01-05".to_string();

    let response = server
        .post_auth("/api/periode", &admin.access_token, &create)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_periode_list_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let mut create = CreatePeriodeRequest::unique();
    let needle = format!("Magang{}", unique_suffix());
    create.name = needle.clone();
    create.status = Some("active".to_string());
    let response = server
        .post_auth("/api/periode", &admin.access_token, &create)
        .await
        .unwrap();
    let periode: PeriodeResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Name search matches case-insensitively
    let response = server
        .get_auth(
            &format!("/api/periode?search={}", needle.to_lowercase()),
            &admin.access_token,
        )
        .await
        .unwrap();
    let found: Vec<PeriodeResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(found.iter().any(|p| p.id == periode.id));

    // Status filter excludes it once narrowed to drafts
    let response = server
        .get_auth(
            &format!("/api/periode?search={needle}&status=draft"),
            &admin.access_token,
        )
        .await
        .unwrap();
    let drafts: Vec<PeriodeResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(drafts.iter().all(|p| p.id != periode.id));
}

#[tokio::test]
async fn test_siswa_cannot_access_periode() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/periode", &auth.access_token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "MISSING_PERMISSIONS")
        .await
        .unwrap();
}

// ============================================================================
// Batch Tests
// ============================================================================

#[tokio::test]
async fn test_batch_crud_as_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/periode",
            &admin.access_token,
            &CreatePeriodeRequest::unique(),
        )
        .await
        .unwrap();
    let periode: PeriodeResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create
    let create = CreateBatchRequest::unique(&periode.id);
    let response = server
        .post_auth("/api/batch", &admin.access_token, &create)
        .await
        .unwrap();
    let batch: BatchResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(batch.periode_id, periode.id);
    assert_eq!(batch.name, create.name);

    // Duplicate name within the same period conflicts
    let response = server
        .post_auth("/api/batch", &admin.access_token, &create)
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "BATCH_NAME_EXISTS")
        .await
        .unwrap();

    // List filtered to the parent period
    let response = server
        .get_auth(
            &format!("/api/batch?periodeId={}", periode.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    let batches: Vec<BatchResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(batches.iter().any(|b| b.id == batch.id));
    assert!(batches.iter().all(|b| b.periode_id == periode.id));

    // Update
    let update = json!({ "status": "active", "studentQuota": 25 });
    let response = server
        .patch_auth(
            &format!("/api/batch/{}", batch.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: BatchResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "active");
    assert_eq!(updated.student_quota, Some(25));

    // The parent period cannot be deleted while the batch is active
    let response = server
        .delete_auth(&format!("/api/periode/{}", periode.id), &admin.access_token)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    // Delete the batch, then the period goes through
    let response = server
        .delete_auth(&format!("/api/batch/{}", batch.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/batch/{}", batch.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/periode/{}", periode.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_batch_requires_existing_periode() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin_req = RegisterRequest::unique_with_role("admin");
    let response = server.post("/api/auth/register", &admin_req).await.unwrap();
    let admin: AuthResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let create = CreateBatchRequest::unique(&uuid::Uuid::new_v4().to_string());
    let response = server
        .post_auth("/api/batch", &admin.access_token, &create)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

// ============================================================================
// Session Client Tests
// ============================================================================

#[tokio::test]
async fn test_session_client_end_to_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    let client = simmas_client::SessionClient::new(server.base_url()).unwrap();
    let user = client
        .login(&register_req.email, &register_req.password)
        .await
        .unwrap();
    assert_eq!(user.email, register_req.email);
    assert!(client.access_token().is_some());

    let me = client.me().await.unwrap();
    assert_eq!(me.id, user.id);

    client.logout().await.unwrap();
    assert!(client.access_token().is_none());
}
