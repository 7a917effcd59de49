//! Notes service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{CreateNoteRequest, ListNotesQuery, UpdateNoteRequest};

const CREATE: &[Field] = &[
    Field::required("body", Kind::String),
    Field::optional("relatedId", Kind::String),
    Field::optional("tags", Kind::Array),
];

const UPDATE: &[Field] = &[
    Field::optional("body", Kind::String),
    Field::optional("tags", Kind::Array),
];

const LIST: &[Field] = &[
    Field::optional("relatedId", Kind::String),
    Field::optional("tags", Kind::Array),
    Field::optional("limit", Kind::Number),
];

/// Notes service client.
pub struct NotesApi {
    session: Session,
}

impl NotesApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a note.
    pub async fn create(&self, request: CreateNoteRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/notes").body(body))
            .await
    }

    /// List notes, optionally filtered.
    pub async fn list(&self, query: ListNotesQuery) -> Result<Value> {
        let query = schema::body_of(&query)?;
        schema::validate(&query, LIST)?;
        self.session
            .fetch(RequestDescriptor::get("/notes").query(query))
            .await
    }

    /// Update a note.
    pub async fn update(&self, id: &str, request: UpdateNoteRequest) -> Result<Value> {
        schema::require_path_param("id", id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPDATE)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/notes/{id}")).body(body))
            .await
    }

    /// Delete a note.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/notes/{id}")))
            .await
    }
}
