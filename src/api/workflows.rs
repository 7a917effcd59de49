//! Workflows service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::RunWorkflowRequest;

const RUN: &[Field] = &[
    Field::optional("input", Kind::Object),
    Field::optional("relatedId", Kind::String),
];

/// Workflows service client.
pub struct WorkflowsApi {
    session: Session,
}

impl WorkflowsApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List workflows.
    pub async fn list(&self) -> Result<Value> {
        self.session.fetch(RequestDescriptor::get("/workflows")).await
    }

    /// Fetch a workflow definition.
    pub async fn get(&self, workflow_id: &str) -> Result<Value> {
        schema::require_path_param("workflowId", workflow_id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/workflows/{workflow_id}")))
            .await
    }

    /// Run a workflow.
    pub async fn run(&self, workflow_id: &str, request: RunWorkflowRequest) -> Result<Value> {
        schema::require_path_param("workflowId", workflow_id)?;
        let body = schema::body_of(&request)?;
        schema::validate(&body, RUN)?;
        self.session
            .fetch(RequestDescriptor::post(format!("/workflows/{workflow_id}/run")).body(body))
            .await
    }
}
