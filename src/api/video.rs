//! Video service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::CreateRoomRequest;

const CREATE_ROOM: &[Field] = &[
    Field::optional("name", Kind::String),
    Field::optional("maxParticipants", Kind::Number),
    Field::optional("record", Kind::Boolean),
];

/// Video service client.
pub struct VideoApi {
    session: Session,
}

impl VideoApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create a video room.
    pub async fn create_room(&self, request: CreateRoomRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CREATE_ROOM)?;
        self.session
            .fetch(RequestDescriptor::post("/video/rooms").body(body))
            .await
    }

    /// Fetch a room.
    pub async fn get_room(&self, room_id: &str) -> Result<Value> {
        schema::require_path_param("roomId", room_id)?;
        self.session
            .fetch(RequestDescriptor::get(format!("/video/rooms/{room_id}")))
            .await
    }

    /// List active rooms.
    pub async fn list_rooms(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::get("/video/rooms"))
            .await
    }

    /// End a room, disconnecting its participants.
    pub async fn end_room(&self, room_id: &str) -> Result<Value> {
        schema::require_path_param("roomId", room_id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/video/rooms/{room_id}")))
            .await
    }
}
