//! Subscriptions service: event delivery webhooks.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::SubscriptionRequest;

const CREATE: &[Field] = &[
    Field::required("url", Kind::String),
    Field::optional("events", Kind::Array),
    Field::optional("objectName", Kind::String),
];

const UPDATE: &[Field] = &[
    Field::optional("url", Kind::String),
    Field::optional("events", Kind::Array),
    Field::optional("objectName", Kind::String),
];

/// Subscriptions service client.
pub struct SubscriptionsApi {
    session: Session,
}

impl SubscriptionsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Register a subscription.
    pub async fn create(&self, request: SubscriptionRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/subscriptions").body(body))
            .await
    }

    /// List subscriptions.
    pub async fn list(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::get("/subscriptions"))
            .await
    }

    /// Update a subscription.
    pub async fn update(&self, id: &str, request: SubscriptionRequest) -> Result<Value> {
        schema::require_path_param("id", id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPDATE)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/subscriptions/{id}")).body(body))
            .await
    }

    /// Remove a subscription.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/subscriptions/{id}")))
            .await
    }
}
