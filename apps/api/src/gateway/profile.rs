use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use super::{object_body, wording, MessageResponse};
use crate::errors::AppError;
use crate::form::SkillSet;
use crate::schema::schema_for;
use crate::state::AppState;
use crate::store::{Collection, Document, Record};

/// GET /api/profile
/// Returns the profile document, or `null` when none has been saved yet.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<Option<Record>>, AppError> {
    let profile = state
        .store
        .find_one(Collection::Profile)
        .await
        .map_err(|e| AppError::backend(wording(Collection::Profile).fetch_failed, e))?;
    Ok(Json(profile))
}

/// POST /api/profile
/// Upserts the single profile document.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut doc = object_body(payload)?;
    normalise_skills(&mut doc);
    schema_for(Collection::Profile)
        .validate(&doc)
        .map_err(AppError::Validation)?;

    let words = wording(Collection::Profile);
    let id = state
        .store
        .upsert_singleton(Collection::Profile, doc)
        .await
        .map_err(|e| AppError::backend(words.add_failed, e))?;

    info!("Saved profile {id}");
    Ok(Json(MessageResponse::new(words.added)))
}

/// Trims and case-insensitively de-duplicates `skills`, keeping first spellings.
/// Lists holding non-strings are left for validation to reject.
fn normalise_skills(doc: &mut Document) {
    let Some(Value::Array(items)) = doc.get("skills") else {
        return;
    };
    if !items.iter().all(Value::is_string) {
        return;
    }
    let skills: SkillSet = items.iter().filter_map(Value::as_str).collect();
    doc.insert("skills".to_string(), Value::from(skills.into_vec()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalise_skills_dedups() {
        let mut doc = json!({"skills": ["JavaScript", " javascript ", "Rust"]})
            .as_object()
            .cloned()
            .unwrap();
        normalise_skills(&mut doc);
        assert_eq!(doc["skills"], json!(["JavaScript", "Rust"]));
    }

    #[test]
    fn test_normalise_skills_drops_blank_entries() {
        let mut doc = json!({"skills": ["   ", ""]}).as_object().cloned().unwrap();
        normalise_skills(&mut doc);
        assert_eq!(doc["skills"], json!([]));
    }

    #[test]
    fn test_normalise_skills_leaves_mixed_lists() {
        let mut doc = json!({"skills": ["Rust", 3]}).as_object().cloned().unwrap();
        normalise_skills(&mut doc);
        assert_eq!(doc["skills"], json!(["Rust", 3]));
    }

    #[test]
    fn test_normalise_skills_ignores_missing() {
        let mut doc = Document::new();
        normalise_skills(&mut doc);
        assert!(doc.is_empty());
    }
}
