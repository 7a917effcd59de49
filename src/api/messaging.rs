//! Messaging service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::SendMessageRequest;

const SEND: &[Field] = &[
    Field::required("to", Kind::String),
    Field::optional("from", Kind::String),
    Field::required("body", Kind::String),
    Field::optional("mediaUrls", Kind::Array),
];

/// Messaging service client.
pub struct MessagingApi {
    session: Session,
}

impl MessagingApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Send an outbound message.
    pub async fn send(&self, request: SendMessageRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, SEND)?;
        self.session
            .fetch(RequestDescriptor::post("/messaging").body(body))
            .await
    }

    /// List message threads.
    pub async fn list(&self) -> Result<Value> {
        self.session.fetch(RequestDescriptor::get("/messaging")).await
    }

    /// Fetch one message thread.
    pub async fn get(&self, thread_id: &str) -> Result<Value> {
        schema::require_path_param("threadId", thread_id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/messaging/{thread_id}")))
            .await
    }
}
