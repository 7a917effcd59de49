//! Phone numbers service.

use serde_json::Value;

use crate::error::Result;
use crate::schema::{self, Field, Kind};
use crate::session::{RequestDescriptor, Session};
use crate::types::{PurchaseNumberRequest, SearchNumbersQuery};

const SEARCH: &[Field] = &[
    Field::optional("country", Kind::String),
    Field::optional("areaCode", Kind::String),
    Field::optional("contains", Kind::String),
];

const PURCHASE: &[Field] = &[
    Field::required("phoneNumber", Kind::String),
    Field::optional("friendlyName", Kind::String),
];

/// Phone numbers service client.
pub struct PhoneNumbersApi {
    session: Session,
}

impl PhoneNumbersApi {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Search purchasable numbers.
    pub async fn search(&self, query: SearchNumbersQuery) -> Result<Value> {
        let query = schema::body_of(&query)?;
        schema::validate(&query, SEARCH)?;
        self.session
            .fetch(RequestDescriptor::get("/phone-numbers/search").query(query))
            .await
    }

    /// Purchase a number into the tenant.
    pub async fn purchase(&self, request: PurchaseNumberRequest) -> Result<Value> {
        let body = schema::body_of(&request)?;
        schema::validate(&body, PURCHASE)?;
        self.session
            .fetch(RequestDescriptor::post("/phone-numbers").body(body))
            .await
    }

    /// List owned numbers.
    pub async fn list(&self) -> Result<Value> {
        self.session
            .fetch(RequestDescriptor::get("/phone-numbers"))
            .await
    }

    /// Release an owned number.
    pub async fn release(&self, id: &str) -> Result<Value> {
        schema::require_path_param("id", id)?;
        self.session
            .fetch(RequestDescriptor::delete(format!("/phone-numbers/{id}")))
            .await
    }
}
