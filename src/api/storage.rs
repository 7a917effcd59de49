//! Storage service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::UploadRequest;

const UPLOAD: &[Field] = &[
    Field::required("fileName", Kind::String),
    Field::optional("contentType", Kind::String),
    Field::required("data", Kind::String),
    Field::optional("relatedId", Kind::String),
];

/// Storage service client.
pub struct StorageApi {
    session: Session,
}

impl StorageApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Upload a file (base64 payload).
    pub async fn upload(&self, request: UploadRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPLOAD)?;
        self.session
            .fetch(RequestDescriptor::post("/storage").body(body))
            .await
    }

    /// Fetch file metadata and a download link.
    pub async fn get(&self, file_id: &str) -> Result<Value> {
        schema::require_path_param("fileId", file_id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/storage/{file_id}")))
            .await
    }

    /// Delete a file.
    pub async fn delete(&self, file_id: &str) -> Result<Value> {
        schema::require_path_param("fileId", file_id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/storage/{file_id}")))
            .await
    }
}
