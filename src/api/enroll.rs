//! Enrollment service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{EnrollRequest, VerifyEnrollmentRequest};

const CREATE: &[Field] = &[
    Field::required("identifier", Kind::String),
    Field::optional("channel", Kind::String),
];

const VERIFY: &[Field] = &[
    Field::required("identifier", Kind::String),
    Field::required("code", Kind::String),
];

/// Enrollment service client.
pub struct EnrollApi {
    session: Session,
}

impl EnrollApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Start an enrollment.
    pub async fn create(&self, request: EnrollRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/enroll").body(body))
            .await
    }

    /// Complete an enrollment with the delivered code.
    pub async fn verify(&self, request: VerifyEnrollmentRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, VERIFY)?;
        self.session
            .fetch(RequestDescriptor::post("/enroll/verify").body(body))
            .await
    }
}
