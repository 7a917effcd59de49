//! Voice service.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::CallRequest;

const CALL: &[Field] = &[
    Field::required("to", Kind::String),
    Field::optional("from", Kind::String),
    Field::optional("callerId", Kind::String),
    Field::optional("machineDetection", Kind::Boolean),
];

const TRANSFER: &[Field] = &[Field::required("to", Kind::String)];

/// Voice service client.
pub struct VoiceApi {
    session: Session,
}

impl VoiceApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Place an outbound call.
    pub async fn call(&self, request: CallRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CALL)?;
        self.session
            .fetch(RequestDescriptor::post("/voice/call").body(body))
            .await
    }

    /// Hang up an in-progress call.
    pub async fn hangup(&self, call_id: &str) -> Result<Value> {
        schema::require_path_param("callId", call_id)?;
        self.session
            .fetch(RequestDescriptor::post(format!("/voice/{call_id}/hangup")))
            .await
    }

    /// Transfer an in-progress call to another destination.
    pub async fn transfer(&self, call_id: &str, to: &str) -> Result<Value> {
        schema::require_path_param("callId", call_id)?;
        let mut body = Map::new();
        body.insert("to".into(), Value::String(to.into()));
        schema::validate(&body, TRANSFER)?;
        self.session
            .fetch(RequestDescriptor::post(format!("/voice/{call_id}/transfer")).body(body))
            .await
    }
}
