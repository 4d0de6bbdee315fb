use super::{
    RecipeCard, ResultsView, EMPTY_MESSAGE, LOADING_MESSAGE, PLACEHOLDER, SUGGESTIONS_PROMPT,
    TAGLINE, TITLE,
};
use crate::suggestions::EXAMPLE_QUERIES;
use std::fmt;

/// Page header with the numbered example chips and the current query
pub fn header(query: &str) -> String {
    let chips = EXAMPLE_QUERIES
        .iter()
        .enumerate()
        .map(|(i, example)| format!("[{}] {}", i + 1, example))
        .collect::<Vec<_>>()
        .join("  ");
    let query = if query.is_empty() { PLACEHOLDER } else { query };

    format!("{TITLE}\n{TAGLINE}\n\n{SUGGESTIONS_PROMPT} {chips}\n\nSearch: {query}\n")
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.ingredients_summary.is_empty() {
            writeln!(f, "  {}", self.ingredients_summary)?;
        }
        if !self.image_url.is_empty() {
            writeln!(f, "  image: {}", self.image_url)?;
        }
        write!(f, "  -> {}", self.link)
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsView::Idle => Ok(()),
            ResultsView::Loading => write!(f, "⠋ {LOADING_MESSAGE}"),
            ResultsView::Empty => write!(f, "{EMPTY_MESSAGE}"),
            ResultsView::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}
