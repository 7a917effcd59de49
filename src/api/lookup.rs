//! Lookup service.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::PhoneNumberLookupQuery;

const PHONE_NUMBER: &[Field] = &[
    Field::required("number", Kind::String),
    Field::optional("country", Kind::String),
];

const EMAIL: &[Field] = &[Field::required("email", Kind::String)];

/// Lookup service client.
pub struct LookupApi {
    session: Session,
}

impl LookupApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Look up carrier and formatting details for a phone number.
    pub async fn phone_number(&self, query: PhoneNumberLookupQuery) -> Result<Value> {
        let query = schema::body_of(&query)?;
        schema::validate(&query, PHONE_NUMBER)?;
        self.session
            .fetch(RequestDescriptor::get("/lookup/phone-number").query(query))
            .await
    }

    /// Look up deliverability details for an email address.
    pub async fn email(&self, email: &str) -> Result<Value> {
        let mut query = Map::new();
        query.insert("email".into(), Value::String(email.into()));
        schema::validate(&query, EMAIL)?;
        self.session
            .fetch(RequestDescriptor::get("/lookup/email").query(query))
            .await
    }
}
