//! Record types service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::RecordTypeRequest;

const CREATE: &[Field] = &[
    Field::required("objectName", Kind::String),
    Field::required("name", Kind::String),
    Field::optional("fields", Kind::Array),
];

const UPDATE: &[Field] = &[
    Field::optional("objectName", Kind::String),
    Field::optional("name", Kind::String),
    Field::optional("fields", Kind::Array),
];

/// Record types service client.
pub struct RecordTypesApi {
    session: Session,
}

impl RecordTypesApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List record types.
    pub async fn list(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::get("/record-types"))
            .await
    }

    /// Fetch a record type.
    pub async fn get(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/record-types/{id}")))
            .await
    }

    /// Create a record type.
    pub async fn create(&self, request: RecordTypeRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/record-types").body(body))
            .await
    }

    /// Update a record type.
    pub async fn update(&self, id: &str, request: RecordTypeRequest) -> Result<Value> {
        schema::require_path_param("id", id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPDATE)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/record-types/{id}")).body(body))
            .await
    }

    /// Delete a record type.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/record-types/{id}")))
            .await
    }
}
