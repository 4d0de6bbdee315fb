//! Pure projection of session state into what the results area shows.

pub mod html;
pub mod terminal;

use crate::model::Recipe;
use crate::session::SessionSnapshot;

pub const TITLE: &str = "Recipe Search";
pub const TAGLINE: &str = "Find delicious recipes by ingredients you have at home.";
pub const SUGGESTIONS_PROMPT: &str = "Try searching for:";
pub const PLACEHOLDER: &str = "Search by ingredient...";
pub const LOADING_MESSAGE: &str = "Loading recipes, please wait...";
pub const EMPTY_MESSAGE: &str = "No recipes found. Try searching with different ingredients.";
pub const LINK_LABEL: &str = "View recipe";

/// Longest ingredient summary shown on a card, in characters
pub const SUMMARY_LIMIT: usize = 120;

/// One card in the results grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub ingredients_summary: String,
    pub link: String,
}

impl RecipeCard {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        RecipeCard {
            title: recipe.label.clone(),
            image_url: recipe.image.clone(),
            image_alt: recipe.label.clone(),
            ingredients_summary: summarize(&recipe.ingredient_lines, SUMMARY_LIMIT),
            link: recipe.url.clone(),
        }
    }
}

/// Contents of the results area. Exactly one state is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// No search yet: nothing below the search form
    Idle,
    Loading,
    Empty,
    Cards(Vec<RecipeCard>),
}

/// Decide what the results area shows
pub fn view(is_loading: bool, has_searched: bool, results: &[Recipe]) -> ResultsView {
    if is_loading {
        ResultsView::Loading
    } else if !results.is_empty() {
        ResultsView::Cards(results.iter().map(RecipeCard::from_recipe).collect())
    } else if has_searched {
        ResultsView::Empty
    } else {
        ResultsView::Idle
    }
}

pub fn view_snapshot(snapshot: &SessionSnapshot) -> ResultsView {
    view(snapshot.is_loading, snapshot.has_searched, &snapshot.results)
}

/// Join ingredient lines with ", " and clamp to `limit` characters
pub fn summarize(lines: &[String], limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }
    let joined = lines.join(", ");
    if joined.chars().count() <= limit {
        return joined;
    }

    let mut clamped: String = joined.chars().take(limit.saturating_sub(1)).collect();
    clamped.truncate(clamped.trim_end().len());
    clamped.push('…');
    clamped
}
