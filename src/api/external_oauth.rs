//! External OAuth service: third-party provider linking.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::ExchangeTokenRequest;

const EXCHANGE: &[Field] = &[
    Field::required("code", Kind::String),
    Field::optional("redirectUri", Kind::String),
];

/// External OAuth service client.
pub struct ExternalOAuthApi {
    session: Session,
}

impl ExternalOAuthApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch the provider's authorization URL for the current user.
    pub async fn authorize_url(&self, provider: &str, redirect_uri: Option<&str>) -> Result<Value> {
        schema::require_path_param("provider", provider)?;
        let mut descriptor =
            RequestDescriptor::get(format!("/external-oauth/{provider}/authorize-url"));
        if let Some(redirect_uri) = redirect_uri {
            let mut query = Map::new();
            query.insert("redirectUri".into(), Value::String(redirect_uri.into()));
            descriptor = descriptor.query(query);
        }
        self.session.fetch(descriptor).await
    }

    /// Exchange an authorization code for linked-account tokens.
    pub async fn exchange(&self, provider: &str, request: ExchangeTokenRequest) -> Result<Value> {
        schema::require_path_param("provider", provider)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, EXCHANGE)?;
        self.session
            .fetch(RequestDescriptor::post(format!("/external-oauth/{provider}/exchange")).body(body))
            .await
    }

    /// Revoke the linked account for a provider.
    pub async fn revoke(&self, provider: &str) -> Result<Value> {
        schema::require_path_param("provider", provider)?;
        self.session
            .fetch(RequestDescriptor::delete(format!(
                "/external-oauth/{provider}"
            )))
            .await
    }
}
