//! Login service.
//!
//! Login and logout mutate the owning session's credential state and
//! mirror the identity tuple into the host key/value sink when one was
//! provided at construction.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::store::{STORE_KEY_NAMESPACE, STORE_KEY_URL, STORE_KEY_USER_ID};
use crate::types::LoginResponse;

const LOGIN: &[Field] = &[
    Field::required("username", Kind::String),
    Field::required("password", Kind::String),
    Field::required("tokenType", Kind::String),
    Field::optional("namespace", Kind::String),
];

const CHANGE_PASSWORD: &[Field] = &[
    Field::required("oldPassword", Kind::String),
    Field::required("newPassword", Kind::String),
];

/// Login service client.
pub struct LoginApi {
    session: Session,
}

impl LoginApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Authenticate against the tenant.
    ///
    /// On success the session's `user_id`, `namespace`, `url`, and `token`
    /// are refreshed from the response, and the identity tuple is mirrored
    /// into the host key/value sink if one is present.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        namespace: Option<&str>,
    ) -> Result<LoginResponse> {
        let mut body = Map::new();
        body.insert("username".into(), Value::String(username.into()));
        body.insert("password".into(), Value::String(password.into()));
        body.insert("tokenType".into(), Value::String("cookie".into()));
        let namespace = namespace
            .map(str::to_string)
            .or_else(|| self.session.namespace());
        if let Some(namespace) = namespace {
            body.insert("namespace".into(), Value::String(namespace));
        }
        schema::validate(&body, LOGIN)?;

        let value = self
            .session
            .fetch(RequestDescriptor::post("/login").body(body).skip_auth())
            .await?;
        let response: LoginResponse = serde_json::from_value(value)?;

        // Merge discovered identity into the shared session state.
        {
            let inner = self.session.inner();
            let mut state = inner.state.write();
            if response.user_id.is_some() {
                state.user_id = response.user_id.clone();
            }
            if response.namespace.is_some() {
                state.namespace = response.namespace.clone();
            }
            if response.url.is_some() {
                state.url = response.url.clone();
            }
            if response.token.is_some() {
                state.token = response.token.clone();
            }
        }

        if let Some(store) = &self.session.inner().store {
            for (key, value) in [
                (STORE_KEY_URL, self.session.url()),
                (STORE_KEY_USER_ID, self.session.user_id()),
                (STORE_KEY_NAMESPACE, self.session.namespace()),
            ] {
                if let Some(value) = value {
                    store.set(key, &value);
                }
            }
        }

        Ok(LoginResponse {
            valid: true,
            user_id: self.session.user_id(),
            namespace: self.session.namespace(),
            url: self.session.url(),
            token: response.token,
        })
    }

    /// End the authenticated session and clear the mirrored identity.
    pub async fn logout(&self) -> Result<Value> {
        let value = self
            .session
            .fetch(RequestDescriptor::delete("/login").skip_auth())
            .await?;

        self.session.inner().state.write().user_id = None;
        if let Some(store) = &self.session.inner().store {
            store.remove(STORE_KEY_URL);
            store.remove(STORE_KEY_USER_ID);
            store.remove(STORE_KEY_NAMESPACE);
        }

        Ok(value)
    }

    /// Validate the current credentials without authenticating the call.
    pub async fn validate(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::post("/login/validate").skip_auth())
            .await
    }

    /// Change the authenticated user's password.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<Value> {
        let mut body = Map::new();
        body.insert("oldPassword".into(), Value::String(old_password.into()));
        body.insert("newPassword".into(), Value::String(new_password.into()));
        schema::validate(&body, CHANGE_PASSWORD)?;

        self.session
            .fetch(RequestDescriptor::post("/login/change-password").body(body))
            .await
    }
}
