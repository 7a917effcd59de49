//! Verification service: one-time-code challenges.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{CheckVerificationRequest, StartVerificationRequest};

const START: &[Field] = &[
    Field::required("to", Kind::String),
    Field::optional("channel", Kind::String),
];

const CHECK: &[Field] = &[
    Field::required("to", Kind::String),
    Field::required("code", Kind::String),
];

/// Verification service client.
pub struct VerificationApi {
    session: Session,
}

impl VerificationApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Start a verification challenge.
    pub async fn start(&self, request: StartVerificationRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, START)?;
        self.session
            .fetch(RequestDescriptor::post("/verification/start").body(body))
            .await
    }

    /// Check a verification code.
    pub async fn check(&self, request: CheckVerificationRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CHECK)?;
        self.session
            .fetch(RequestDescriptor::post("/verification/check").body(body))
            .await
    }
}
