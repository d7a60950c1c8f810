use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::{insert_record, list_records, object_body, MessageResponse};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::{Collection, Record};

/// GET /api/experience
pub async fn handle_list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    list_records(&state, Collection::Experience).await
}

/// POST /api/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let doc = object_body(payload)?;
    insert_record(&state, Collection::Experience, doc).await
}

/// GET /api/education
pub async fn handle_list_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    list_records(&state, Collection::Education).await
}

/// POST /api/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let doc = object_body(payload)?;
    insert_record(&state, Collection::Education, doc).await
}
