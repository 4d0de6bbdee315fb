use serde::{Deserialize, Serialize};

/// A single search result as returned by the recipe API.
///
/// Field names follow the API's JSON keys. Missing keys decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque unique handle for the recipe
    pub uri: String,
    /// Display title
    pub label: String,
    /// Remote image URL
    pub image: String,
    /// Human-readable ingredient descriptions, in API order
    pub ingredient_lines: Vec<String>,
    /// Structured ingredient descriptors
    pub ingredients: Vec<Ingredient>,
    /// External recipe page
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub text: String,
}

/// Wrapper object the API places around each recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    pub recipe: Recipe,
}

/// Top-level search response. Only `hits` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

impl SearchResponse {
    /// Unwrap every hit into its recipe, preserving order
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits.into_iter().map(|hit| hit.recipe).collect()
    }
}
