//! Generic CRUD gateway: one handler shape per verb, parameterised by
//! collection. Each handler does a single store call (an update merges in the
//! store) and maps any store failure to a per-operation 500 message.

pub mod delete;
pub mod history;
pub mod others;
pub mod profile;


use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::schema::schema_for;
use crate::state::AppState;
use crate::store::{Collection, Document, Record, RecordId};

/// `{"message": ...}` plus the new id on inserts.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: RecordId) -> Self {
        MessageResponse {
            message: message.into(),
            id: Some(id),
        }
    }
}

/// Client-facing wording for one list collection.
pub(crate) struct Wording {
    pub fetch_failed: &'static str,
    pub added: &'static str,
    pub add_failed: &'static str,
}

pub(crate) fn wording(collection: Collection) -> Wording {
    match collection {
        Collection::Profile => Wording {
            fetch_failed: "Failed to fetch profile",
            added: "Profile updated successfully",
            add_failed: "Failed to update profile",
        },
        Collection::Experience => Wording {
            fetch_failed: "Failed to fetch experience",
            added: "Experience added successfully",
            add_failed: "Failed to add experience",
        },
        Collection::Education => Wording {
            fetch_failed: "Failed to fetch education",
            added: "Education added successfully",
            add_failed: "Failed to add education",
        },
        Collection::Others => Wording {
            fetch_failed: "Failed to fetch other sections",
            added: "Section added successfully",
            add_failed: "Failed to add section",
        },
    }
}

/// Unwraps a JSON body that must be an object. Store-assigned `_id` keys are
/// dropped so clients can post back what they fetched.
pub(crate) fn object_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Document, AppError> {
    let Json(value) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    match value {
        Value::Object(mut doc) => {
            doc.remove("_id");
            Ok(doc)
        }
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// GET over a list collection.
pub(crate) async fn list_records(
    state: &AppState,
    collection: Collection,
) -> Result<Json<Vec<Record>>, AppError> {
    let records = state
        .store
        .find_all(collection)
        .await
        .map_err(|e| AppError::backend(wording(collection).fetch_failed, e))?;
    Ok(Json(records))
}

/// POST into a list collection: validate, insert, answer 201 with the new id.
pub(crate) async fn insert_record(
    state: &AppState,
    collection: Collection,
    doc: Document,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    schema_for(collection)
        .validate(&doc)
        .map_err(AppError::Validation)?;

    let words = wording(collection);
    let id = state
        .store
        .insert_one(collection, doc)
        .await
        .map_err(|e| AppError::backend(words.add_failed, e))?;

    info!("Inserted {collection} record {id}");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(words.added, id)),
    ))
}
