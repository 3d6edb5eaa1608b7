use crate::api::{internal_error, not_found};
use crate::store::StoreError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

/// GET /delete/{id} — remove a recipe and return to the list.
pub async fn delete_recipe(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> Response {
    match state.store.delete(id) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(StoreError::NotFound) => not_found("Recipe not found"),
        Err(e) => {
            tracing::error!("Failed to delete recipe {}: {}", id, e);
            internal_error("There was a problem deleting your recipe")
        }
    }
}
