use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::error::ExtractError;
use crate::text::strip_quotes;

/// Serving/yield range in unit counts, `(min, max)`. `(0, 0)` means no
/// extraction rule matched the span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ServingSize(pub u32, pub u32);

impl ServingSize {
    pub fn is_unresolved(&self) -> bool {
        *self == ServingSize(0, 0)
    }
}

/// One structured recipe record, immutable once assembled.
///
/// `ingredients` keeps insertion order and holds no duplicate lines; it
/// serializes as the newline-joined text downstream consumers index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub serving_size: ServingSize,
    pub notes: String,
    #[serde(serialize_with = "newline_joined")]
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    /// The serialized shape of the ingredient list.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join("\n")
    }
}

fn newline_joined<S>(lines: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&lines.join("\n"))
}

/// Immutable title index over the finalized recipe list.
///
/// Every recipe is registered under its raw title, the title wrapped in ASCII
/// double quotes, and the title with surrounding quote glyphs stripped, so
/// lookup tolerates the quoting inconsistencies of both the corpus and the
/// caller.
#[derive(Debug, Default)]
pub struct RecipeIndex {
    recipes: Vec<Recipe>,
    by_title: HashMap<String, usize>,
}

impl RecipeIndex {
    /// Build the index from the finalized, corpus-ordered recipe list.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut by_title = HashMap::new();
        for (position, recipe) in recipes.iter().enumerate() {
            by_title.insert(recipe.title.clone(), position);
            by_title.insert(format!("\"{}\"", recipe.title), position);
            by_title.insert(strip_quotes(&recipe.title).to_string(), position);
        }
        Self { recipes, by_title }
    }

    /// Find a recipe under any normalized variant of `title`.
    pub fn lookup(&self, title: &str) -> Result<&Recipe, ExtractError> {
        let variants = [
            title.to_string(),
            format!("\"{title}\""),
            strip_quotes(title).to_string(),
        ];
        for variant in &variants {
            if let Some(&position) = self.by_title.get(variant) {
                return Ok(&self.recipes[position]);
            }
        }
        Err(ExtractError::RecipeNotFound(title.to_string()))
    }

    /// The recipes in corpus order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecipeIndex {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            serving_size: ServingSize::default(),
            notes: String::new(),
            ingredients: vec!["1 egg".to_string(), "1 cup milk".to_string()],
            instructions: "Mix and bake.".to_string(),
        }
    }

    #[test]
    fn test_serializes_ingredients_as_joined_text() {
        let json = serde_json::to_value(recipe("HUSH PUPPIES")).unwrap();
        assert_eq!(json["ingredients"], "1 egg\n1 cup milk");
        assert_eq!(json["serving_size"], serde_json::json!([0, 0]));
    }

    #[test]
    fn test_lookup_tolerates_quote_variants() {
        let index = RecipeIndex::from_recipes(vec![recipe("CHEESE SAUCE")]);
        let direct = index.lookup("CHEESE SAUCE").unwrap();
        let quoted = index.lookup("\"CHEESE SAUCE\"").unwrap();
        let curly = index.lookup("“CHEESE SAUCE”").unwrap();
        assert_eq!(direct, quoted);
        assert_eq!(direct, curly);
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let index = RecipeIndex::from_recipes(vec![recipe("CHEESE SAUCE")]);
        let err = index.lookup("VANILLA PUDDING").unwrap_err();
        assert!(matches!(err, ExtractError::RecipeNotFound(_)));
    }

    #[test]
    fn test_recipes_keep_corpus_order() {
        let index = RecipeIndex::from_recipes(vec![recipe("FIRST"), recipe("SECOND")]);
        let titles: Vec<_> = index.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["FIRST", "SECOND"]);
    }
}
