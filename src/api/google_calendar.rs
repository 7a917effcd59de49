//! Google Calendar service, proxied through the platform's linked account.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{CreateEventRequest, ListEventsQuery};

const LIST_EVENTS: &[Field] = &[
    Field::optional("timeMin", Kind::String),
    Field::optional("timeMax", Kind::String),
    Field::optional("maxResults", Kind::Number),
];

const CREATE_EVENT: &[Field] = &[
    Field::required("summary", Kind::String),
    Field::required("start", Kind::Object),
    Field::required("end", Kind::Object),
    Field::optional("attendees", Kind::Array),
    Field::optional("description", Kind::String),
];

/// Google Calendar service client.
pub struct GoogleCalendarApi {
    session: Session,
}

impl GoogleCalendarApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List events on the linked calendar.
    pub async fn list_events(&self, query: ListEventsQuery) -> Result<Value> {
        let query = schema::body_of(&query)?;
        schema::validate(&query, LIST_EVENTS)?;
        self.session
            .fetch(RequestDescriptor::get("/google-calendar/events").query(query))
            .await
    }

    /// Create a calendar event.
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE_EVENT)?;
        self.session
            .fetch(RequestDescriptor::post("/google-calendar/events").body(body))
            .await
    }

    /// Delete a calendar event.
    pub async fn delete_event(&self, event_id: &str) -> Result<Value> {
        schema::require_path_param("eventId", event_id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!(
                "/google-calendar/events/{event_id}"
            )))
            .await
    }
}
