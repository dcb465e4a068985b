//! Client info extractor
//!
//! Captures the device description and source IP for the refresh token
//! audit trail.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use simmas_core::entities::ClientInfo;

use crate::response::ApiError;

/// Device and IP metadata extracted from request headers
///
/// The IP comes from `x-forwarded-for` (first hop) or `x-real-ip`; behind
/// no proxy both are absent and the field stays empty.
#[derive(Debug, Clone)]
pub struct ExtractClientInfo(pub ClientInfo);

#[async_trait]
impl<S> FromRequestParts<S> for ExtractClientInfo
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let device_info = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get("x-real-ip")
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string)
            });

        Ok(ExtractClientInfo(ClientInfo {
            device_info,
            ip_address,
        }))
    }
}
