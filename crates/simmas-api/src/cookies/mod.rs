//! Refresh token cookie handling
//!
//! The opaque refresh token only ever travels in an httpOnly cookie so
//! page scripts cannot read it. `SameSite=Strict` keeps it off
//! cross-site requests; `Secure` is added outside development.

use axum_extra::extract::cookie::{Cookie, SameSite};
use simmas_common::AppConfig;

/// Cookie name for the opaque refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Build the refresh token cookie
pub fn refresh_cookie(token: String, config: &AppConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((REFRESH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(config.jwt.refresh_token_expiry))
        .build();

    if config.app.env.is_production() {
        cookie.set_secure(true);
    }

    cookie
}

/// Build an expired cookie that removes the refresh token
pub fn clear_refresh_cookie(config: &AppConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((REFRESH_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .expires(time::OffsetDateTime::UNIX_EPOCH)
        .build();

    if config.app.env.is_production() {
        cookie.set_secure(true);
    }

    cookie
}
