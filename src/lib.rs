pub mod api;
pub mod config;
pub mod db;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod store;
pub mod templates;

use crate::llm::CompletionProvider;
use crate::store::RecipeStore;
use axum::Router;
use std::sync::Arc;

/// Application state shared across all handlers.
pub struct AppState {
    pub store: RecipeStore,
    pub llm: Arc<dyn CompletionProvider>,
    pub templates: tera::Tera,
}

/// Build the application router with the given state.
pub fn app(state: Arc<AppState>) -> Router {
    api::recipes::router().with_state(state)
}
