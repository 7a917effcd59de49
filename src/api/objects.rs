//! Objects service: CRUD over tenant record objects.

use serde_json::Value;

use crate::error::Result;
use crate::schema;
use crate::session::{RequestDescriptor, Session};
use crate::types::SearchObjectsQuery;

/// Objects service client.
pub struct ObjectsApi {
    session: Session,
}

impl ObjectsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a record of the named object.
    pub async fn create(&self, object_name: &str, record: Value) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        let body = schema::object_body("record", record)?;
        self.session
            .fetch(RequestDescriptor::post(format!("/objects/{object_name}")).body(body))
            .await
    }

    /// Fetch a record by id.
    pub async fn get(&self, object_name: &str, id: &str) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/objects/{object_name}/{id}")))
            .await
    }

    /// Search records of the named object.
    pub async fn search(&self, object_name: &str, query: SearchObjectsQuery) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        let query = schema::body_of(&query)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/objects/{object_name}")).query(query))
            .await
    }

    /// Replace a record.
    pub async fn update(&self, object_name: &str, id: &str, record: Value) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        schema::require_path_param("id", id)?;
        let body = schema::object_body("record", record)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/objects/{object_name}/{id}")).body(body))
            .await
    }

    /// Delete a record.
    pub async fn delete(&self, object_name: &str, id: &str) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!(
                "/objects/{object_name}/{id}"
            )))
            .await
    }
}
