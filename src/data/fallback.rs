//! Built-in recipe dataset
//!
//! Used whenever no recipes API is configured or the configured one cannot
//! be reached. The records are kept as static seeds and turned into owned
//! [`Recipe`] values on demand.

use super::{Ingredient, Recipe};

/// Static form of a recipe, allowing compile-time initialization
struct RecipeSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    time_minutes: u32,
    /// (name, amount) pairs in display order
    ingredients: &'static [(&'static str, Option<&'static str>)],
    instructions: &'static [&'static str],
    tags: &'static [&'static str],
}

impl RecipeSeed {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: self.image.to_string(),
            time_minutes: self.time_minutes,
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, amount)| Ingredient {
                    name: name.to_string(),
                    amount: amount.map(str::to_string),
                })
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags.iter().map(|s| s.to_string()).collect())
            },
        }
    }
}

static SEEDS: [RecipeSeed; 3] = [
    RecipeSeed {
        id: "1",
        title: "Lemon Herb Grilled Salmon",
        description: "Fresh salmon with zesty lemon and fragrant herbs.",
        image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=1200&q=80&auto=format&fit=crop",
        time_minutes: 25,
        ingredients: &[
            ("Salmon fillets", Some("2")),
            ("Lemon", Some("1")),
            ("Olive oil", Some("2 tbsp")),
            ("Fresh dill", None),
            ("Salt & pepper", None),
        ],
        instructions: &[
            "Preheat grill to medium-high.",
            "Brush salmon with olive oil and season.",
            "Grill 4–5 minutes per side.",
            "Finish with lemon juice and fresh dill.",
        ],
        tags: &["seafood", "healthy"],
    },
    RecipeSeed {
        id: "2",
        title: "Creamy Mushroom Pasta",
        description: "Silky pasta in a rich mushroom cream sauce.",
        image: "https://images.unsplash.com/photo-1521389508051-d7ffb5dc8bbf?w=1200&q=80&auto=format&fit=crop",
        time_minutes: 30,
        ingredients: &[
            ("Pasta", Some("300 g")),
            ("Mushrooms", Some("250 g")),
            ("Garlic", Some("2 cloves")),
            ("Cream", Some("200 ml")),
            ("Parmesan", Some("50 g")),
        ],
        instructions: &[
            "Cook pasta al dente.",
            "Sauté mushrooms and garlic.",
            "Add cream and simmer.",
            "Toss pasta with sauce and parmesan.",
        ],
        tags: &["vegetarian"],
    },
    RecipeSeed {
        id: "3",
        title: "Citrus Quinoa Salad",
        description: "Light and refreshing salad with quinoa and citrus.",
        image: "https://images.unsplash.com/photo-1503831901032-74b3f9ab7b52?w=1200&q=80&auto=format&fit=crop",
        time_minutes: 20,
        ingredients: &[
            ("Quinoa", Some("1 cup")),
            ("Orange", Some("1")),
            ("Cucumber", Some("1/2")),
            ("Mint leaves", None),
            ("Olive oil", None),
        ],
        instructions: &[
            "Cook quinoa and cool.",
            "Chop citrus and vegetables.",
            "Toss with olive oil and mint.",
        ],
        tags: &["gluten-free", "salad"],
    },
];

/// Get the full built-in dataset in display order
pub fn fallback_recipes() -> Vec<Recipe> {
    SEEDS.iter().map(RecipeSeed::to_recipe).collect()
}

/// Get a built-in recipe by its ID
///
/// Returns `None` if no built-in recipe has that ID. IDs are case sensitive.
pub fn fallback_recipe_by_id(id: &str) -> Option<Recipe> {
    SEEDS
        .iter()
        .find(|seed| seed.id == id)
        .map(RecipeSeed::to_recipe)
}
