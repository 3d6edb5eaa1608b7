pub mod create;
pub mod delete;
pub mod list;
pub mod view;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Returns the router for the recipe pages (mounted at the root).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list::index).post(create::create_recipe))
        .route("/delete/{id}", get(delete::delete_recipe))
        .route(
            "/view/{id}",
            get(view::view_recipe).post(view::update_recipe),
        )
}
