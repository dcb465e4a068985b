//! Session client with transparent access-token refresh
//!
//! [`SessionClient`] is the one authoritative holder of the current access
//! token. Every request attaches the token as a bearer header; the refresh
//! token never passes through this code at all, it rides in the `reqwest`
//! cookie jar as the httpOnly cookie the server set.
//!
//! The interesting part is 401 recovery. When many in-flight requests hit
//! an expired token at once, exactly one of them may call the refresh
//! endpoint; the rest must wait for that call and then replay with the new
//! token. This is coordinated with a generation counter and a fair async
//! mutex rather than flags: a failing request records the token generation
//! it saw, then queues on the mutex. If the generation moved while it
//! waited, another task already refreshed and it replays immediately.
//! Otherwise it performs the refresh itself. Each original request is
//! retried at most once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::store::{InMemoryTokenStore, TokenStore};
use crate::types::{AuthData, Envelope, ErrorEnvelope, LogoutAllData, RefreshData, RegisterPayload, UserProfile};

/// Callback invoked when the session cannot be refreshed.
///
/// This is the "redirect to login" seam: the client has already cleared
/// the token and the store by the time the hook runs.
pub type SessionExpiredHook = Box<dyn Fn() + Send + Sync>;

struct Inner {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    /// Bumped every time the held token changes. Lets a queued 401 retry
    /// detect that another task already refreshed while it waited.
    generation: AtomicU64,
    /// Serializes refresh attempts. Tokio's mutex wakes waiters in FIFO
    /// order, so queued retries replay in the order their requests failed.
    refresh_gate: Mutex<()>,
    store: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

/// HTTP client for the SIMMAS API that owns its session state.
#[derive(Clone)]
pub struct SessionClient {
    inner: Arc<Inner>,
}

/// Builder for [`SessionClient`].
pub struct SessionClientBuilder {
    base_url: String,
    store: Option<Arc<dyn TokenStore>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl SessionClientBuilder {
    /// Use a persistent token store; the builder seeds the session with
    /// whatever token the store currently holds.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the hook invoked when a refresh attempt fails for good.
    pub fn on_session_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_session_expired = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> ClientResult<SessionClient> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryTokenStore::new()));
        let token = store.load();

        Ok(SessionClient {
            inner: Arc::new(Inner {
                http,
                base_url: self.base_url,
                token: RwLock::new(token),
                generation: AtomicU64::new(0),
                refresh_gate: Mutex::new(()),
                store,
                on_session_expired: self.on_session_expired,
            }),
        })
    }
}

impl SessionClient {
    /// Start building a client for the given API base URL.
    pub fn builder(base_url: impl Into<String>) -> SessionClientBuilder {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        SessionClientBuilder {
            base_url,
            store: None,
            on_session_expired: None,
        }
    }

    /// Client with an in-memory store and no expiry hook.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::builder(base_url).build()
    }

    /// The access token currently held, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner.token.read().clone()
    }

    // ------------------------------------------------------------------
    // Auth convenience methods
    // ------------------------------------------------------------------

    /// `POST /api/auth/login`. On success the access token is installed
    /// and the refresh cookie lands in the cookie jar.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<UserProfile> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .inner
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;
        let auth: AuthData = expect_data(response).await?;
        self.install_token(auth.access_token);
        Ok(auth.user)
    }

    /// `POST /api/auth/register`.
    pub async fn register(&self, payload: &RegisterPayload) -> ClientResult<UserProfile> {
        let response = self
            .inner
            .http
            .post(self.url("/api/auth/register"))
            .json(payload)
            .send()
            .await?;
        let auth: AuthData = expect_data(response).await?;
        self.install_token(auth.access_token);
        Ok(auth.user)
    }

    /// `GET /api/auth/me`.
    pub async fn me(&self) -> ClientResult<UserProfile> {
        self.get_json("/api/auth/me").await
    }

    /// `POST /api/auth/logout`. Local state is cleared even when the
    /// server cannot be reached; being logged out locally is achievable
    /// regardless of server-side state.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self
            .inner
            .http
            .post(self.url("/api/auth/logout"))
            .send()
            .await;
        if let Err(e) = result {
            warn!(error = %e, "logout request failed, clearing local session anyway");
        }
        self.drop_token();
        Ok(())
    }

    /// `POST /api/auth/logout-all`. Returns how many sessions the server
    /// revoked, then clears local state.
    pub async fn logout_all(&self) -> ClientResult<u64> {
        let data: LogoutAllData = self.post_json("/api/auth/logout-all", &serde_json::json!({})).await?;
        self.drop_token();
        Ok(data.revoked_sessions)
    }

    // ------------------------------------------------------------------
    // Generic request surface
    // ------------------------------------------------------------------

    /// Authorized GET returning the envelope's `data` field.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send_authorized(Method::GET, path, None).await?;
        expect_data(response).await
    }

    /// Authorized POST returning the envelope's `data` field.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            code: "SERIALIZATION_FAILED".to_owned(),
            message: e.to_string(),
        })?;
        let response = self.send_authorized(Method::POST, path, Some(body)).await?;
        expect_data(response).await
    }

    /// Authorized PATCH returning the envelope's `data` field.
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            code: "SERIALIZATION_FAILED".to_owned(),
            message: e.to_string(),
        })?;
        let response = self.send_authorized(Method::PATCH, path, Some(body)).await?;
        expect_data(response).await
    }

    /// Authorized DELETE; succeeds on any 2xx status.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.send_authorized(Method::DELETE, path, None).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error_from_response(status, response).await)
        }
    }

    // ------------------------------------------------------------------
    // 401 recovery
    // ------------------------------------------------------------------

    async fn send_authorized(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ClientResult<Response> {
        // Record the generation before sending. If this request 401s and
        // the counter has moved by the time we hold the refresh gate,
        // someone else already swapped the token for us.
        let seen_generation = self.inner.generation.load(Ordering::Acquire);
        let response = self.build_request(method.clone(), path, body.as_ref()).send().await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(%method, path, "request unauthorized, attempting token refresh");
        self.refresh_once(seen_generation).await?;

        // Single replay with whatever token the refresh installed.
        let response = self.build_request(method, path, body.as_ref()).send().await?;
        Ok(response)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> RequestBuilder {
        let mut request = self.inner.http.request(method, self.url(path));
        if let Some(token) = self.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Ensure the token generation has advanced past `seen_generation`,
    /// refreshing at most once across all concurrent callers.
    async fn refresh_once(&self, seen_generation: u64) -> ClientResult<()> {
        let _gate = self.inner.refresh_gate.lock().await;

        if self.inner.generation.load(Ordering::Acquire) != seen_generation {
            // Another task refreshed while we queued.
            return Ok(());
        }

        let response = self
            .inner
            .http
            .post(self.url("/api/auth/refresh"))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let refreshed: RefreshData = expect_data(response).await?;
            self.install_token(refreshed.access_token);
            return Ok(());
        }

        let error = error_from_response(status, response).await;
        warn!(%status, error = %error, "token refresh rejected, session is over");
        self.drop_token();
        if let Some(hook) = &self.inner.on_session_expired {
            hook();
        }
        Err(ClientError::SessionExpired)
    }

    fn install_token(&self, token: String) {
        self.inner.store.save(&token);
        *self.inner.token.write() = Some(token);
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn drop_token(&self) {
        self.inner.store.clear();
        *self.inner.token.write() = None;
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.inner.base_url)
            .field("has_token", &self.inner.token.read().is_some())
            .finish()
    }
}

async fn expect_data<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|_| ClientError::UnexpectedBody { status })?;
        Ok(envelope.data)
    } else {
        Err(error_from_response(status, response).await)
    }
}

async fn error_from_response(status: StatusCode, response: Response) -> ClientError {
    match response.json::<ErrorEnvelope>().await {
        Ok(body) => ClientError::Api {
            status,
            code: body.error.code,
            message: body.error.message,
        },
        Err(_) => ClientError::UnexpectedBody { status },
    }
}
