//! AI service: generative models and text-to-speech.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{ChatRequest, PlaybookRequest, TtsRequest};

const CHAT: &[Field] = &[
    Field::optional("prompt", Kind::String),
    Field::optional("messages", Kind::Array),
    Field::optional("relatedId", Kind::String),
    Field::optional("model", Kind::String),
    Field::optional("temperature", Kind::Number),
    Field::optional("subscriptionId", Kind::String),
    Field::optional("stream", Kind::Boolean),
    Field::required("method", Kind::String),
];

const PLAYBOOK: &[Field] = &[
    Field::optional("prompt", Kind::String),
    Field::optional("messages", Kind::Array),
    Field::optional("relatedId", Kind::String),
    Field::optional("model", Kind::String),
    Field::optional("temperature", Kind::Number),
    Field::optional("subscriptionId", Kind::String),
    Field::optional("stream", Kind::Boolean),
    Field::optional("method", Kind::String),
    Field::required("playbookId", Kind::String),
    Field::optional("sessionId", Kind::String),
];

const TTS: &[Field] = &[
    Field::required("text", Kind::String),
    Field::optional("voice", Kind::String),
    Field::optional("languageCode", Kind::String),
    Field::optional("ssmlGender", Kind::String),
    Field::optional("audioEncoding", Kind::String),
    Field::optional("speakingRate", Kind::Number),
    Field::optional("pitch", Kind::Number),
    Field::optional("volumeGainDb", Kind::Number),
    Field::optional("effectsProfileIds", Kind::Array),
];

/// AI service client.
pub struct AiApi {
    session: Session,
}

impl AiApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Access generative model operations.
    pub fn generative(&self) -> GenerativeApi {
        GenerativeApi {
            session: self.session.clone(),
        }
    }

    /// Access text-to-speech operations.
    pub fn tts(&self) -> TtsApi {
        TtsApi {
            session: self.session.clone(),
        }
    }
}

/// Generative model operations.
pub struct GenerativeApi {
    session: Session,
}

impl GenerativeApi {
    /// Run a chat completion.
    pub async fn chat(&self, request: ChatRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CHAT)?;
        self.session
            .fetch(RequestDescriptor::post("/ai/generative/chat").body(body))
            .await
    }

    /// Execute a playbook, optionally resuming a playbook session.
    pub async fn playbook(&self, request: PlaybookRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, PLAYBOOK)?;
        self.session
            .fetch(RequestDescriptor::post("/ai/generative/playbook").body(body))
            .await
    }

    /// Run a chat completion against the tenant's Ollama deployment.
    pub async fn chat_ollama(&self, request: ChatRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, CHAT)?;
        self.session
            .fetch(RequestDescriptor::post("/ai/generative/ollama").body(body))
            .await
    }
}

/// Text-to-speech operations.
pub struct TtsApi {
    session: Session,
}

impl TtsApi {
    /// Synthesize speech from text.
    pub async fn create(&self, request: TtsRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, TTS)?;
        self.session
            .fetch(RequestDescriptor::post("/ai/tts").body(body))
            .await
    }
}
