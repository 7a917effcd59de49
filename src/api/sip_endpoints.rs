//! SIP endpoints service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::SipEndpointRequest;

const CREATE: &[Field] = &[
    Field::required("username", Kind::String),
    Field::required("password", Kind::String),
    Field::optional("callerId", Kind::String),
];

const UPDATE: &[Field] = &[
    Field::optional("username", Kind::String),
    Field::optional("password", Kind::String),
    Field::optional("callerId", Kind::String),
];

/// SIP endpoints service client.
pub struct SipEndpointsApi {
    session: Session,
}

impl SipEndpointsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Provision a SIP endpoint.
    pub async fn create(&self, request: SipEndpointRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE)?;
        self.session
            .fetch(RequestDescriptor::post("/sip-endpoints").body(body))
            .await
    }

    /// List SIP endpoints.
    pub async fn list(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::get("/sip-endpoints"))
            .await
    }

    /// Fetch a SIP endpoint.
    pub async fn get(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/sip-endpoints/{id}")))
            .await
    }

    /// Update a SIP endpoint.
    pub async fn update(&self, id: &str, request: SipEndpointRequest) -> Result<Value> {
        schema::require_path_param("id", id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, UPDATE)?;
        self.session
            .fetch(RequestDescriptor::put(format!("/sip-endpoints/{id}")).body(body))
            .await
    }

    /// Remove a SIP endpoint.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/sip-endpoints/{id}")))
            .await
    }
}
