pub mod health;
pub mod schema;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::gateway::{delete as generic_delete, history, others, profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/schema/:resource", get(schema::handle_get_schema))
        // Singleton
        .route(
            "/api/profile",
            get(profile::handle_get_profile).post(profile::handle_save_profile),
        )
        // List collections
        .route(
            "/api/experience",
            get(history::handle_list_experience).post(history::handle_add_experience),
        )
        .route(
            "/api/education",
            get(history::handle_list_education).post(history::handle_add_education),
        )
        .route(
            "/api/others",
            get(others::handle_list_sections)
                .post(others::handle_add_section)
                .put(others::handle_update_section)
                .delete(others::handle_delete_section),
        )
        .route("/api/delete", delete(generic_delete::handle_delete_record))
        .with_state(state)
}
