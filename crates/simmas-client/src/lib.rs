//! SIMMAS API client
//!
//! A `reqwest`-based client that manages the two-token session for its
//! caller: the short-lived access token lives in the [`SessionClient`]
//! (mirrored into a [`TokenStore`]), while the httpOnly refresh cookie
//! stays inside the HTTP client's cookie jar. On a 401 the client
//! refreshes the access token once, coordinating concurrent failures so
//! only a single refresh call ever goes out, and replays the original
//! request.

pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use error::{ClientError, ClientResult};
pub use session::{SessionClient, SessionClientBuilder, SessionExpiredHook};
pub use store::{InMemoryTokenStore, TokenStore};
pub use types::{RegisterPayload, UserProfile};
