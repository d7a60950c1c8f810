use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::MessageResponse;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::Collection;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub collection: Option<String>,
    pub id: Option<String>,
}

/// DELETE /api/delete?collection=&id=
/// Removes one record from a list collection.
pub async fn handle_delete_record(
    State(state): State<AppState>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(name), Some(id)) = (present(params.collection), present(params.id)) else {
        return Err(AppError::BadRequest("Missing collection or id".to_string()));
    };

    let collection: Collection = name
        .parse()
        .map_err(|_| AppError::NotFound(format!("{name} item not found")))?;
    if collection.is_singleton() {
        return Err(AppError::BadRequest(format!(
            "{collection} cannot be deleted through this endpoint"
        )));
    }

    let deleted = state
        .store
        .delete_one(collection, &id)
        .await
        .map_err(|e| AppError::backend(format!("Failed to delete {collection} item"), e))?;

    if !deleted {
        return Err(AppError::NotFound(format!("{collection} item not found")));
    }

    info!("Deleted {collection} record {id}");
    Ok(Json(MessageResponse::new(format!(
        "{collection} item deleted successfully"
    ))))
}
