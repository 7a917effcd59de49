//! HTTP client SDK for the Unbound multi-tenant platform.
//!
//! This crate provides a typed session for interacting with a tenant's
//! Unbound API. A [`Session`] bundles the tenant namespace, credentials,
//! and base URL, and exposes one facade per service group.
//!
//! # Example
//!
//! ```no_run
//! use unbound_client::{Session, SessionOptions, Result};
//! use unbound_client::types::ChatRequest;
//!
//! # async fn example() -> Result<()> {
//! // Named-options construction
//! let session = Session::new(SessionOptions {
//!     namespace: Some("acme".into()),
//!     token: Some("secret".into()),
//!     url: Some("https://api.unbound.example".into()),
//!     ..Default::default()
//! });
//!
//! // Or the legacy positional credential tuple
//! let _legacy = Session::with_credentials(Some("acme"), None, Some("secret"), None);
//!
//! // Log in and let the session discover its identity
//! let login = session.login().login("user", "pass", None).await?;
//! println!("logged in as {:?}", login.user_id);
//!
//! // Call a service
//! let reply = session
//!     .ai()
//!     .generative()
//!     .chat(ChatRequest {
//!         method: Some("gpt".into()),
//!         prompt: Some("Hello!".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{reply}");
//!
//! // Layouts, portals, and the rest follow the same shape
//! let layouts = session.layouts().get("contact", None, None).await?;
//! println!("{layouts}");
//! # Ok(())
//! # }
//! ```
//!
//! # Services
//!
//! Every session exposes the full roster of service facades:
//! `login`, `objects`, `messaging`, `video`, `voice`, `ai` (generative and
//! tts), `lookup`, `layouts`, `subscriptions`, `workflows`, `notes`,
//! `storage`, `verification`, `portals`, `sip_endpoints`,
//! `external_oauth`, `google_calendar`, `enroll`, `phone_numbers`, and
//! `record_types`, plus [`Session::generate_id`].
//!
//! # Wire contract
//!
//! Requests carry `Authorization: Bearer <token>` when the session holds a
//! token (login and validation skip it), `Content-Type: application/json`
//! with a body, and one context header per non-empty session field:
//!
//! | Session field   | Header                       |
//! |-----------------|------------------------------|
//! | `namespace`     | `x-unbound-namespace`        |
//! | `call_id`       | `x-unbound-call-id`          |
//! | `fw_request_id` | `x-unbound-fw-request-id`    |
//!
//! These header names are stable across releases. Query strings are
//! URL-encoded and array values repeat the key. When a base URL omits its
//! scheme, `https://` is assumed.
//!
//! # Host persistence
//!
//! When a [`store::KeyValueStore`] is supplied at construction, login
//! mirrors `unbound_url`, `unbound_userId`, and `unbound_namespace` into
//! it and logout removes them. Without a sink both operations simply skip
//! the mirroring.

pub mod api;
pub mod error;
pub mod schema;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use session::{
    create_session, Session, SessionOptions, HEADER_CALL_ID, HEADER_FW_REQUEST_ID,
    HEADER_NAMESPACE,
};
pub use store::{KeyValueStore, MemoryStore};
pub use types::LoginResponse;
