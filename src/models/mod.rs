use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use uuid::Uuid;

use crate::repository::Document;

pub mod about;
pub mod admin;
pub mod contact;
pub mod course;
pub mod dashboard;
pub mod event;
pub mod faculty;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod homepage;
pub mod public;
pub mod service;

/// Stored
///
/// A persisted record as clients see it: the store id under `_id`, the
/// entity fields flattened next to it and the two store-maintained timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> Stored<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stored<U> {
        Stored {
            id: self.id,
            data: f(self.data),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<T: serde::de::DeserializeOwned> TryFrom<Document> for Stored<T> {
    type Error = serde_json::Error;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id,
            data: serde_json::from_value(doc.body)?,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

/// Message-only response body (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request body for the `/{id}/reorder` routes.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReorderRequest {
    pub order: i64,
}

impl crate::validation::Validate for ReorderRequest {
    fn validate(&self, v: &mut crate::validation::Violations) {
        v.non_negative("order", self.order);
    }
}

pub(crate) fn default_true() -> bool {
    true
}

/// Accepts a JSON boolean or the strings `"true"` / `"false"`, which is what
/// form-driven clients send.
pub(crate) fn bool_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::custom(format!("expected a boolean, got \"{other}\""))),
        },
    }
}

pub(crate) fn opt_bool_or_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    bool_or_string(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn stored_flattens_body() {
        let now = Utc::now();
        let doc = Document {
            id: Uuid::new_v4(),
            body: json!({ "name": "Math" }),
            created_at: now,
            updated_at: now,
        };
        let id = doc.id;
        let stored: Stored<Named> = doc.try_into().unwrap();
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["_id"], json!(id));
        assert_eq!(value["name"], "Math");
        assert!(value.get("createdAt").is_some());
    }

    #[derive(Debug, Deserialize)]
    struct Flagged {
        #[serde(deserialize_with = "bool_or_string")]
        flag: bool,
    }

    #[test]
    fn flags_accept_strings() {
        let parsed: Flagged = serde_json::from_value(json!({ "flag": "true" })).unwrap();
        assert!(parsed.flag);
        let parsed: Flagged = serde_json::from_value(json!({ "flag": false })).unwrap();
        assert!(!parsed.flag);
        assert!(serde_json::from_value::<Flagged>(json!({ "flag": "yes" })).is_err());
    }
}
