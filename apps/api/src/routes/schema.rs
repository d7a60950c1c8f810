use axum::{extract::Path, Json};

use crate::errors::AppError;
use crate::schema::descriptor::{describe, FormDescriptor};
use crate::store::Collection;

/// GET /api/schema/:resource
/// Field rules, blank entry and picker options for one resource's form.
pub async fn handle_get_schema(
    Path(resource): Path<String>,
) -> Result<Json<FormDescriptor>, AppError> {
    let collection: Collection = resource
        .parse()
        .map_err(|_| AppError::NotFound(format!("No schema for resource '{resource}'")))?;
    Ok(Json(describe(collection)?))
}
