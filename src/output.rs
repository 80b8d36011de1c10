//! Plain-text and JSON rendering of recipes

use std::fmt::Write;

use serde::Serialize;

use crate::data::{Recipe, RecipeSource};

/// Width of the title column in list output
const TITLE_WIDTH: usize = 32;

/// Renders the list view, one recipe per line followed by a summary line
pub fn render_list(recipes: &[Recipe], search: &str, source: Option<RecipeSource>) -> String {
    let mut out = String::new();
    let term = search.trim();

    if recipes.is_empty() {
        if term.is_empty() {
            out.push_str("No recipes available.\n");
        } else {
            let _ = writeln!(out, "No recipes match \"{}\".", term);
        }
        return out;
    }

    let id_width = recipes.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);
    for recipe in recipes {
        let _ = write!(
            out,
            "{:<id_width$}  {:<TITLE_WIDTH$}  {:>3} min",
            recipe.id, recipe.title, recipe.time_minutes
        );
        if let Some(tags) = recipe.tags.as_ref().filter(|tags| !tags.is_empty()) {
            let _ = write!(out, "  [{}]", tags.join(", "));
        }
        out.push('\n');
    }

    let noun = if recipes.len() == 1 { "recipe" } else { "recipes" };
    let _ = write!(out, "\n{} {}", recipes.len(), noun);
    if !term.is_empty() {
        let _ = write!(out, " matching \"{}\"", term);
    }
    if let Some(source) = source {
        let _ = write!(out, " ({})", source);
    }
    out.push('\n');
    out
}

/// Renders the detail view of a single recipe
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title);
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "{}", recipe.description);
    }
    out.push('\n');

    let _ = writeln!(out, "Time:  {} min", recipe.time_minutes);
    let _ = writeln!(out, "Image: {}", recipe.image);
    if let Some(tags) = recipe.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let _ = writeln!(out, "Tags:  {}", tags.join(", "));
    }

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        match &ingredient.amount {
            Some(amount) => {
                let _ = writeln!(out, "  - {} ({})", ingredient.name, amount);
            }
            None => {
                let _ = writeln!(out, "  - {}", ingredient.name);
            }
        }
    }

    out.push_str("\nInstructions\n");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", step + 1, instruction);
    }

    out
}

/// Renders any serializable value as pretty JSON with a trailing newline
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
