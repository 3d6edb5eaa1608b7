use crate::api::{bad_request, internal_error, not_found};
use crate::models::CONTENT_MAX_LEN;
use crate::store::StoreError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

/// GET /view/{id} — a recipe's full detail plus the edit form.
pub async fn view_recipe(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> Response {
    let recipe = match state.store.get(id) {
        Ok(recipe) => recipe,
        Err(StoreError::NotFound) => return not_found("Recipe not found"),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            return internal_error("There was an issue displaying your recipe");
        }
    };

    let mut context = tera::Context::new();
    context.insert("recipe", &recipe);

    match state.templates.render("view.html", &context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render recipe {}: {}", id, e);
            internal_error("There was an issue displaying your recipe")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeForm {
    pub content: String,
}

/// POST /view/{id} — overwrite the recipe's content.
pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateRecipeForm>,
) -> Response {
    if form.content.trim().is_empty() {
        return bad_request("Content cannot be empty");
    }
    if form.content.len() > CONTENT_MAX_LEN {
        return bad_request("Content is too long");
    }

    match state.store.update_content(id, &form.content) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(StoreError::NotFound) => not_found("Recipe not found"),
        Err(e) => {
            tracing::error!("Failed to update recipe {}: {}", id, e);
            internal_error("There was an issue updating your recipe")
        }
    }
}
