use crate::api::internal_error;
use crate::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

/// GET / — every saved recipe plus the creation form.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let recipes = match state.store.list_all() {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to load recipes: {}", e);
            return internal_error("There was an issue loading your recipes");
        }
    };

    let mut context = tera::Context::new();
    context.insert("recipes", &recipes);

    match state.templates.render("index.html", &context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render recipe list: {}", e);
            internal_error("There was an issue displaying your recipes")
        }
    }
}
