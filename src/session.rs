//! Session core: credential state, service registry, and HTTP transport.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use crate::api::{
    AiApi, EnrollApi, ExternalOAuthApi, GoogleCalendarApi, LayoutsApi, LoginApi, LookupApi,
    MessagingApi, NotesApi, ObjectsApi, PhoneNumbersApi, PortalsApi, RecordTypesApi,
    SipEndpointsApi, StorageApi, SubscriptionsApi, VerificationApi, VideoApi, VoiceApi,
    WorkflowsApi,
};
use crate::error::{Error, Result};
use crate::store::KeyValueStore;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the tenant namespace.
pub const HEADER_NAMESPACE: &str = "x-unbound-namespace";
/// Header carrying the correlation id of an in-progress call.
pub const HEADER_CALL_ID: &str = "x-unbound-call-id";
/// Header carrying the forwarded-request correlation id.
pub const HEADER_FW_REQUEST_ID: &str = "x-unbound-fw-request-id";

/// Options for constructing a [`Session`].
///
/// All fields are optional; `Default` gives an unauthenticated session
/// with no base URL, suitable only for endpoints discovered later (login
/// fills in `url`, `user_id`, and credentials).
#[derive(Default)]
pub struct SessionOptions {
    /// Tenant namespace.
    pub namespace: Option<String>,
    /// Correlation id of an in-progress telephony call.
    pub call_id: Option<String>,
    /// Bearer token for authenticated calls.
    pub token: Option<String>,
    /// Forwarded-request correlation id for chained server-to-server calls.
    pub fw_request_id: Option<String>,
    /// Absolute base URL of the tenant's API.
    pub url: Option<String>,
    /// Authenticated principal, if already known.
    pub user_id: Option<String>,
    /// Host key/value sink mirrored by login/logout.
    pub store: Option<Arc<dyn KeyValueStore>>,
    /// Externally owned realtime socket registry. Opaque to the client.
    pub socket_store: Option<Arc<dyn Any + Send + Sync>>,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

/// Mutable per-session credential and context state.
#[derive(Debug, Default, Clone)]
pub(crate) struct SessionState {
    pub(crate) namespace: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) call_id: Option<String>,
    pub(crate) fw_request_id: Option<String>,
}

/// Unbound API session.
///
/// Bundles tenant credentials, the base URL, and the roster of service
/// facades. Cloning is cheap and every clone (and every facade) observes
/// credential mutations immediately.
///
/// # Example
///
/// ```no_run
/// use unbound_client::{Session, SessionOptions};
/// use unbound_client::types::ChatRequest;
///
/// # async fn example() -> unbound_client::Result<()> {
/// let session = Session::new(SessionOptions {
///     namespace: Some("acme".into()),
///     token: Some("secret".into()),
///     url: Some("https://api.unbound.example".into()),
///     ..Default::default()
/// });
///
/// let reply = session
///     .ai()
///     .generative()
///     .chat(ChatRequest {
///         method: Some("gpt".into()),
///         prompt: Some("Hello!".into()),
///         ..Default::default()
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

/// Inner shared state.
pub(crate) struct SessionInner {
    pub(crate) http: reqwest::Client,
    pub(crate) state: RwLock<SessionState>,
    pub(crate) store: Option<Arc<dyn KeyValueStore>>,
    pub(crate) socket_store: Option<Arc<dyn Any + Send + Sync>>,
    pub(crate) timeout: Duration,
}

/// Create a session from options. Equivalent to [`Session::new`].
pub fn create_session(options: SessionOptions) -> Session {
    Session::new(options)
}

impl Session {
    /// Create a session from named options.
    pub fn new(options: SessionOptions) -> Self {
        let state = SessionState {
            namespace: options.namespace,
            user_id: options.user_id,
            url: options.url,
            token: options.token,
            call_id: options.call_id,
            fw_request_id: options.fw_request_id,
        };
        Session {
            inner: Arc::new(SessionInner {
                http: reqwest::Client::new(),
                state: RwLock::new(state),
                store: options.store,
                socket_store: options.socket_store,
                timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            }),
        }
    }

    /// Create a session from the legacy positional credential tuple.
    ///
    /// Observationally equivalent to [`Session::new`] with the same four
    /// fields set and everything else absent.
    pub fn with_credentials(
        namespace: Option<&str>,
        call_id: Option<&str>,
        token: Option<&str>,
        fw_request_id: Option<&str>,
    ) -> Self {
        Session::new(SessionOptions {
            namespace: namespace.map(str::to_string),
            call_id: call_id.map(str::to_string),
            token: token.map(str::to_string),
            fw_request_id: fw_request_id.map(str::to_string),
            ..Default::default()
        })
    }

    pub(crate) fn inner(&self) -> &SessionInner {
        &self.inner
    }

    // ─────────────────────────────────────────────────────────────────────
    // Context accessors and mutators
    // ─────────────────────────────────────────────────────────────────────

    /// Tenant namespace.
    pub fn namespace(&self) -> Option<String> {
        self.inner.state.read().namespace.clone()
    }

    /// Authenticated principal, set by login.
    pub fn user_id(&self) -> Option<String> {
        self.inner.state.read().user_id.clone()
    }

    /// Base URL of the tenant's API.
    pub fn url(&self) -> Option<String> {
        self.inner.state.read().url.clone()
    }

    /// Bearer token.
    pub fn token(&self) -> Option<String> {
        self.inner.state.read().token.clone()
    }

    /// Call correlation id.
    pub fn call_id(&self) -> Option<String> {
        self.inner.state.read().call_id.clone()
    }

    /// Forwarded-request correlation id.
    pub fn fw_request_id(&self) -> Option<String> {
        self.inner.state.read().fw_request_id.clone()
    }

    /// The opaque socket registry handle, if one was supplied.
    pub fn socket_store(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.inner.socket_store.as_ref()
    }

    /// Replace the bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.state.write().token = Some(token.into());
    }

    /// Replace the tenant namespace.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        self.inner.state.write().namespace = Some(namespace.into());
    }

    /// Replace the base URL.
    pub fn set_url(&self, url: impl Into<String>) {
        self.inner.state.write().url = Some(url.into());
    }

    /// Replace the call correlation id.
    pub fn set_call_id(&self, call_id: impl Into<String>) {
        self.inner.state.write().call_id = Some(call_id.into());
    }

    /// Replace the forwarded-request correlation id.
    pub fn set_fw_request_id(&self, fw_request_id: impl Into<String>) {
        self.inner.state.write().fw_request_id = Some(fw_request_id.into());
    }

    /// Generate an opaque unique identifier.
    pub fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Service facades
    // ─────────────────────────────────────────────────────────────────────

    /// Access the login service.
    pub fn login(&self) -> LoginApi {
        LoginApi::new(self.clone())
    }

    /// Access the objects service.
    pub fn objects(&self) -> ObjectsApi {
        ObjectsApi::new(self.clone())
    }

    /// Access the messaging service.
    pub fn messaging(&self) -> MessagingApi {
        MessagingApi::new(self.clone())
    }

    /// Access the video service.
    pub fn video(&self) -> VideoApi {
        VideoApi::new(self.clone())
    }

    /// Access the voice service.
    pub fn voice(&self) -> VoiceApi {
        VoiceApi::new(self.clone())
    }

    /// Access the AI service.
    pub fn ai(&self) -> AiApi {
        AiApi::new(self.clone())
    }

    /// Access the lookup service.
    pub fn lookup(&self) -> LookupApi {
        LookupApi::new(self.clone())
    }

    /// Access the layouts service.
    pub fn layouts(&self) -> LayoutsApi {
        LayoutsApi::new(self.clone())
    }

    /// Access the subscriptions service.
    pub fn subscriptions(&self) -> SubscriptionsApi {
        SubscriptionsApi::new(self.clone())
    }

    /// Access the workflows service.
    pub fn workflows(&self) -> WorkflowsApi {
        WorkflowsApi::new(self.clone())
    }

    /// Access the notes service.
    pub fn notes(&self) -> NotesApi {
        NotesApi::new(self.clone())
    }

    /// Access the storage service.
    pub fn storage(&self) -> StorageApi {
        StorageApi::new(self.clone())
    }

    /// Access the verification service.
    pub fn verification(&self) -> VerificationApi {
        VerificationApi::new(self.clone())
    }

    /// Access the portals service.
    pub fn portals(&self) -> PortalsApi {
        PortalsApi::new(self.clone())
    }

    /// Access the SIP endpoints service.
    pub fn sip_endpoints(&self) -> SipEndpointsApi {
        SipEndpointsApi::new(self.clone())
    }

    /// Access the external OAuth service.
    pub fn external_oauth(&self) -> ExternalOAuthApi {
        ExternalOAuthApi::new(self.clone())
    }

    /// Access the Google Calendar service.
    pub fn google_calendar(&self) -> GoogleCalendarApi {
        GoogleCalendarApi::new(self.clone())
    }

    /// Access the enrollment service.
    pub fn enroll(&self) -> EnrollApi {
        EnrollApi::new(self.clone())
    }

    /// Access the phone numbers service.
    pub fn phone_numbers(&self) -> PhoneNumbersApi {
        PhoneNumbersApi::new(self.clone())
    }

    /// Access the record types service.
    pub fn record_types(&self) -> RecordTypesApi {
        RecordTypesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────────────

    /// Dispatch a request descriptor and decode the response.
    pub(crate) async fn fetch(&self, descriptor: RequestDescriptor) -> Result<Value> {
        let state = self.inner.state.read().clone();

        let base = state
            .url
            .as_deref()
            .ok_or_else(|| Error::Config("base URL is not set; pass `url` or login first".into()))?;
        let url = absolute_url(base, &descriptor.path, descriptor.query.as_ref())?;

        let mut request = self
            .inner
            .http
            .request(descriptor.method.clone(), url.clone())
            .timeout(self.inner.timeout);

        if !descriptor.skip_auth {
            if let Some(token) = &state.token {
                request = request.header(AUTHORIZATION, bearer(token)?);
            }
        }
        for (name, value) in [
            (HEADER_NAMESPACE, &state.namespace),
            (HEADER_CALL_ID, &state.call_id),
            (HEADER_FW_REQUEST_ID, &state.fw_request_id),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                request = request.header(name, header_value(name, value)?);
            }
        }

        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        tracing::debug!(method = %descriptor.method, url = %url, "dispatching request");
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        } else {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            tracing::warn!(status = status.as_u16(), path = %descriptor.path, "remote error");
            Err(Error::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("Session")
            .field("namespace", &state.namespace)
            .field("user_id", &state.user_id)
            .field("url", &state.url)
            .field("call_id", &state.call_id)
            .field("fw_request_id", &state.fw_request_id)
            .finish_non_exhaustive()
    }
}

fn bearer(token: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::Config("token contains invalid header characters".into()))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("`{name}` contains invalid header characters")))
}

/// Join the session base URL with a request path and optional query.
///
/// The base may omit its scheme, in which case `https://` is assumed.
/// The path is appended verbatim (it always starts with `/`), so a base
/// that carries a path prefix keeps it.
pub(crate) fn absolute_url(base: &str, path: &str, query: Option<&Map<String, Value>>) -> Result<Url> {
    let base = base.trim_end_matches('/');
    let full = if base.contains("://") {
        format!("{base}{path}")
    } else {
        format!("https://{base}{path}")
    };
    let mut url = Url::parse(&full)?;

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            match value {
                Value::Null => {}
                // Arrays repeat the key once per element.
                Value::Array(items) => {
                    for item in items {
                        pairs.append_pair(key, &query_scalar(item));
                    }
                }
                other => {
                    pairs.append_pair(key, &query_scalar(other));
                }
            }
        }
    }

    Ok(url)
}

fn query_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Internal request shape handed from a facade to the transport.
#[derive(Debug)]
pub(crate) struct RequestDescriptor {
    pub(crate) path: String,
    pub(crate) method: Method,
    pub(crate) query: Option<Map<String, Value>>,
    pub(crate) body: Option<Map<String, Value>>,
    pub(crate) skip_auth: bool,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        RequestDescriptor {
            path: path.into(),
            method,
            query: None,
            body: None,
            skip_auth: false,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn query(mut self, query: Map<String, Value>) -> Self {
        self.query = Some(query);
        self
    }

    pub(crate) fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_construction_has_absent_credentials() {
        let session = Session::new(SessionOptions::default());
        assert_eq!(session.namespace(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.url(), None);
        assert_eq!(session.token(), None);
        assert_eq!(session.call_id(), None);
        assert_eq!(session.fw_request_id(), None);
        assert!(session.socket_store().is_none());
    }

    #[test]
    fn legacy_form_matches_modern_form() {
        let legacy = Session::with_credentials(Some("acme"), Some("c1"), Some("tok"), Some("f1"));
        let modern = Session::new(SessionOptions {
            namespace: Some("acme".into()),
            call_id: Some("c1".into()),
            token: Some("tok".into()),
            fw_request_id: Some("f1".into()),
            ..Default::default()
        });

        assert_eq!(legacy.namespace(), modern.namespace());
        assert_eq!(legacy.call_id(), modern.call_id());
        assert_eq!(legacy.token(), modern.token());
        assert_eq!(legacy.fw_request_id(), modern.fw_request_id());
        assert_eq!(legacy.url(), None);
        assert_eq!(legacy.user_id(), None);
    }

    #[test]
    fn factory_helper_forwards_to_modern_form() {
        let session = create_session(SessionOptions {
            namespace: Some("acme".into()),
            token: Some("tok".into()),
            ..Default::default()
        });
        assert_eq!(session.namespace().as_deref(), Some("acme"));
        assert_eq!(session.token().as_deref(), Some("tok"));
    }

    #[test]
    fn every_facade_is_reachable_without_any_network_call() {
        let session = Session::new(SessionOptions::default());
        let _ = session.login();
        let _ = session.objects();
        let _ = session.messaging();
        let _ = session.video();
        let _ = session.voice();
        let _ = session.ai().generative();
        let _ = session.ai().tts();
        let _ = session.lookup();
        let _ = session.layouts();
        let _ = session.subscriptions();
        let _ = session.workflows();
        let _ = session.notes();
        let _ = session.storage();
        let _ = session.verification();
        let _ = session.portals();
        let _ = session.sip_endpoints();
        let _ = session.external_oauth();
        let _ = session.google_calendar();
        let _ = session.enroll();
        let _ = session.phone_numbers();
        let _ = session.record_types();
    }

    #[test]
    fn credential_mutation_is_shared() {
        let session = Session::new(SessionOptions::default());
        let clone = session.clone();
        session.set_token("fresh");
        assert_eq!(clone.token().as_deref(), Some("fresh"));
    }

    #[test]
    fn generate_id_values_are_distinct() {
        let session = Session::new(SessionOptions::default());
        assert_ne!(session.generate_id(), session.generate_id());
    }

    #[test]
    fn absolute_url_supplies_default_scheme() {
        let url = absolute_url("api.unbound.example", "/login", None).unwrap();
        assert_eq!(url.as_str(), "https://api.unbound.example/login");
    }

    #[test]
    fn absolute_url_keeps_explicit_scheme_and_trims_slash() {
        let url = absolute_url("http://localhost:8080/", "/layouts/contact", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/layouts/contact");
    }

    #[test]
    fn absolute_url_keeps_base_path_prefix() {
        let url = absolute_url("https://api.example/t1", "/login", None).unwrap();
        assert_eq!(url.as_str(), "https://api.example/t1/login");
    }

    #[test]
    fn query_arrays_repeat_the_key() {
        let query = match json!({"tag": ["a", "b"]}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let url = absolute_url("https://api.example", "/notes", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("tag=a&tag=b"));
    }

    #[test]
    fn scalar_query_values_render_unquoted() {
        let query = match json!({"limit": 5}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let url = absolute_url("https://api.example", "/notes", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("limit=5"));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let query = match json!({"domain": "a b&c"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let url = absolute_url("https://api.example", "/portals/public", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("domain=a+b%26c"));
    }

    #[test]
    fn null_query_values_are_skipped() {
        let query = match json!({"a": null, "b": "x"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let url = absolute_url("https://api.example", "/x", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("b=x"));
    }
}
