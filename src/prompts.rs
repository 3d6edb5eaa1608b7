//! Prompt template for recipe generation.

/// Render the generation prompt for the four user selections.
///
/// Pure and deterministic. The prompt embeds all four values verbatim and a
/// worked example of the ingredients/instructions layout so the model
/// mirrors that format in its output.
pub fn render_recipe_prompt(
    protein: &str,
    special_ingredient: &str,
    region_one: &str,
    region_two: &str,
) -> String {
    format!(
        "Create a detailed recipe in the style of {region_one} and {region_two}, \
         that uses {protein} for the protein, includes {special_ingredient}, and \
         a reasonable quantity of salt. Make sure to include {region_one} \
         ingredients and {region_two} ingredients. Please write the ingredients \
         and instructions in the format of a recipe. Use detailed instructions. \
         Please format the recipe list as follows:\n\n\
         Instructions: [instructions]\n\n\
         Ingredients:\n[ingredients]\n\n\
         Ingredients:\n\
         - Ingredient 1\n\
         - Ingredient 2\n\
         \nInstructions:\n\
         1. Step 1\n\
         2. Step 2\n\
         3. Step 3\n\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_all_options_verbatim() {
        let prompt = render_recipe_prompt("chicken", "turmeric", "Thai", "Mexican");
        assert!(prompt.contains("chicken"));
        assert!(prompt.contains("turmeric"));
        assert!(prompt.contains("Thai"));
        assert!(prompt.contains("Mexican"));
    }

    #[test]
    fn is_deterministic() {
        let a = render_recipe_prompt("tofu", "ginger", "Japanese", "");
        let b = render_recipe_prompt("tofu", "ginger", "Japanese", "");
        assert_eq!(a, b);
    }

    #[test]
    fn embeds_the_format_example() {
        let prompt = render_recipe_prompt("beef", "harissa", "Italian", "");
        assert!(prompt.contains("Instructions: [instructions]"));
        assert!(prompt.contains("- Ingredient 1"));
        assert!(prompt.contains("1. Step 1"));
    }

    #[test]
    fn handles_empty_second_region() {
        let prompt = render_recipe_prompt("pork", "miso", "Japanese", "");
        assert!(prompt.contains("in the style of Japanese and ,"));
    }
}
