use crate::api::internal_error;
use crate::prompts;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

/// Sentinel the form submits when no second style is chosen.
const NO_REGION_SENTINEL: &str = "None";

#[derive(Debug, Deserialize)]
pub struct CreateRecipeForm {
    pub protein_option: String,
    pub special_ingredient: String,
    pub region_one: String,
    pub region_two: String,
    #[serde(default)]
    pub name: String,
}

/// POST / — generate a recipe from the submitted options and save it.
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateRecipeForm>,
) -> Response {
    let region_two = if form.region_two == NO_REGION_SENTINEL {
        String::new()
    } else {
        form.region_two
    };

    let options = format!(
        "{}, {}, {}, {}",
        form.protein_option, form.special_ingredient, form.region_one, region_two
    );

    // A blank name gets one synthesized from the selections
    let name = if form.name.is_empty() {
        format!(
            "{}-{} {} {}",
            form.region_one, region_two, form.special_ingredient, form.protein_option
        )
    } else {
        form.name
    };

    let prompt = prompts::render_recipe_prompt(
        &form.protein_option,
        &form.special_ingredient,
        &form.region_one,
        &region_two,
    );

    let content = match state.llm.complete(&prompt).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Recipe generation failed: {}", e);
            return internal_error("There was an issue generating your recipe");
        }
    };

    match state.store.create(&options, &name, &content) {
        Ok(recipe) => {
            tracing::info!(id = recipe.id, name = %recipe.name, "recipe created");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            internal_error("There was an issue creating your recipe")
        }
    }
}
