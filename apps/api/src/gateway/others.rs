use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{insert_record, list_records, object_body, MessageResponse};
use crate::errors::AppError;
use crate::schema::schema_for;
use crate::state::AppState;
use crate::store::{Collection, Record};

#[derive(Debug, Deserialize)]
pub struct SectionIdQuery {
    pub id: Option<String>,
}

/// GET /api/others
pub async fn handle_list_sections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    list_records(&state, Collection::Others).await
}

/// POST /api/others
pub async fn handle_add_section(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let doc = object_body(payload)?;
    insert_record(&state, Collection::Others, doc).await
}

/// PUT /api/others
/// Body: `{"id": ..., <fields to merge>}`.
pub async fn handle_update_section(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut patch = object_body(payload)?;
    let id = match patch.remove("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id,
        _ => return Err(AppError::BadRequest("Section ID is required".to_string())),
    };

    schema_for(Collection::Others)
        .validate_partial(&patch)
        .map_err(AppError::Validation)?;

    let matched = state
        .store
        .update_fields(Collection::Others, &id, patch)
        .await
        .map_err(|e| AppError::backend("Failed to update section", e))?;

    if !matched {
        return Err(AppError::NotFound("Section not found".to_string()));
    }

    info!("Updated others record {id}");
    Ok(Json(MessageResponse::new("Section updated successfully")))
}

/// DELETE /api/others?id=
pub async fn handle_delete_section(
    State(state): State<AppState>,
    Query(params): Query<SectionIdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = params
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Section ID is required".to_string()))?;

    let deleted = state
        .store
        .delete_one(Collection::Others, &id)
        .await
        .map_err(|e| AppError::backend("Failed to delete section", e))?;

    if !deleted {
        return Err(AppError::NotFound("Section not found".to_string()));
    }

    info!("Deleted others record {id}");
    Ok(Json(MessageResponse::new("Section deleted successfully")))
}
