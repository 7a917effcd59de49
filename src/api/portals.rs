//! Portals service.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{CreatePortalRequest, UpdatePortalRequest};

const CREATE: &[Field] = &[
    Field::required("name", Kind::String),
    Field::optional("domain", Kind::String),
    Field::optional("isPublic", Kind::Boolean),
    Field::optional("settings", Kind::Object),
];

const UPDATE: &[Field] = &[
    Field::optional("name", Kind::String),
    Field::optional("domain", Kind::String),
    Field::optional("isPublic", Kind::Boolean),
    Field::optional("settings", Kind::Object),
];

const GET_PUBLIC: &[Field] = &[Field::required("domain", Kind::String)];

/// Portals service client.
pub struct PortalsApi {
    session: Session,
}

impl PortalsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a portal.
    pub async fn create(&self, request: CreatePortalRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/portals").body(body))
            .await
    }

    /// Update a portal. Only supplied fields are sent.
    pub async fn update(&self, portal_id: &str, request: UpdatePortalRequest) -> Result<Value> {
        schema::require_path_param("portalId", portal_id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPDATE)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/portals/{portal_id}")).body(body))
            .await
    }

    /// Trigger DNS verification for a portal's custom domain.
    pub async fn verify_dns(&self, portal_id: &str) -> Result<Value> {
        schema::require_path_param("portalId", portal_id)?;
        self.session
            .fetch(RequestDescriptor::post(format!(
                "/portals/{portal_id}/verify-dns"
            )))
            .await
    }

    /// Resolve the public portal served on a domain.
    pub async fn get_public(&self, domain: &str) -> Result<Value> {
        let mut query = Map::new();
        query.insert("domain".into(), Value::String(domain.into()));
        schema::validate(&query, GET_PUBLIC)?;
        self.session
            .fetch(RequestDescriptor::get("/portals/public").query(query))
            .await
    }

    /// Delete a portal.
    pub async fn delete(&self, portal_id: &str) -> Result<Value> {
        schema::require_path_param("portalId", portal_id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/portals/{portal_id}")))
            .await
    }
}
