//! Layouts service.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::DynamicSelectSearchQuery;

const DYNAMIC_SELECT_SEARCH: &[Field] = &[
    Field::required("objectName", Kind::String),
    Field::required("fieldName", Kind::String),
    Field::optional("search", Kind::String),
];

/// Layouts service client.
pub struct LayoutsApi {
    session: Session,
}

impl LayoutsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch layouts for an object, or one layout when `id` is given.
    pub async fn get(
        &self,
        object_name: &str,
        id: Option<&str>,
        query: Option<Map<String, Value>>,
    ) -> Result<Value> {
        schema::require_path_param("objectName", object_name)?;
        let path = match id {
            Some(id) => {
                schema::require_path_param("id", id)?;
                format!("/layouts/{object_name}/{id}")
            }
            None => format!("/layouts/{object_name}"),
        };
        let mut descriptor = RequestDescriptor::get(path);
        if let Some(query) = query {
            descriptor = descriptor.query(query);
        }
        self.session.fetch(descriptor).await
    }

    /// Create a layout from a full layout document.
    pub async fn create(&self, layout: Value) -> Result<Value> {
        let body = schema::object_body("layout", layout)?;
        self.session
            .fetch(RequestDescriptor::post("/layouts/").body(body))
            .await
    }

    /// Replace a layout.
    pub async fn update(&self, id: &str, layout: Value) -> Result<Value> {
        schema::require_path_param("id", id)?;
        let body = schema::object_body("layout", layout)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/layouts/{id}")).body(body))
            .await
    }

    /// Delete a layout.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/layouts/{id}")))
            .await
    }

    /// Search options for a dynamic select field.
    pub async fn dynamic_select_search(&self, query: DynamicSelectSearchQuery) -> Result<Value> {
        let query = schema::body_of(&query)?;
        schema::validate(&query, DYNAMIC_SELECT_SEARCH)?;
        self.session
            .fetch(RequestDescriptor::get("/layouts/dynamic-select-search").query(query))
            .await
    }
}
