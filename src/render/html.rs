use super::{
    RecipeCard, ResultsView, EMPTY_MESSAGE, LINK_LABEL, LOADING_MESSAGE, PLACEHOLDER,
    SUGGESTIONS_PROMPT, TAGLINE, TITLE,
};
use crate::suggestions::EXAMPLE_QUERIES;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render a standalone page: header, example chips, search form and results area
pub fn page(query: &str, results: &ResultsView) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(TITLE)));
    out.push_str("</head>\n<body>\n<main class=\"recipe-search\">\n");
    out.push_str(&header(query));
    out.push_str(&results_area(results));
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn header(query: &str) -> String {
    let mut out = String::from("<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(TITLE)));
    out.push_str(&format!("<p class=\"tagline\">{}</p>\n", encode_text(TAGLINE)));

    out.push_str("<div class=\"suggestions\">\n");
    out.push_str(&format!("<p>{}</p>\n", encode_text(SUGGESTIONS_PROMPT)));
    for example in EXAMPLE_QUERIES {
        // Chips fill the search field; they do not submit the form
        out.push_str(&format!(
            "<button type=\"button\" class=\"chip\" data-query=\"{}\">{}</button>\n",
            encode_double_quoted_attribute(example),
            encode_text(example)
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<form class=\"search\" method=\"get\" role=\"search\">\n");
    out.push_str(&format!(
        "<input type=\"search\" name=\"q\" placeholder=\"{}\" value=\"{}\">\n",
        encode_double_quoted_attribute(PLACEHOLDER),
        encode_double_quoted_attribute(query)
    ));
    out.push_str("<button type=\"submit\" aria-label=\"Search\">Search</button>\n");
    out.push_str("</form>\n</header>\n");
    out
}

/// Render only the results area
pub fn results_area(results: &ResultsView) -> String {
    let mut out = String::new();
    match results {
        ResultsView::Idle => {}
        ResultsView::Loading => {
            out.push_str("<div class=\"loading\" role=\"status\">\n");
            out.push_str("<span class=\"spinner\"></span>\n");
            out.push_str(&format!("<p>{}</p>\n", encode_text(LOADING_MESSAGE)));
            out.push_str("</div>\n");
        }
        ResultsView::Empty => {
            out.push_str("<div class=\"results\">\n");
            out.push_str(&format!(
                "<p class=\"empty\">{}</p>\n",
                encode_text(EMPTY_MESSAGE)
            ));
            out.push_str("</div>\n");
        }
        ResultsView::Cards(cards) => {
            out.push_str("<div class=\"results\">\n");
            for card in cards {
                out.push_str(&card_html(card));
            }
            out.push_str("</div>\n");
        }
    }
    out
}

fn card_html(card: &RecipeCard) -> String {
    // The whole card is the link
    let mut out = String::new();
    out.push_str(&format!(
        "<a class=\"card\" href=\"{}\">\n",
        encode_double_quoted_attribute(&card.link)
    ));
    out.push_str("<article>\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" width=\"400\" height=\"300\">\n",
        encode_double_quoted_attribute(&card.image_url),
        encode_double_quoted_attribute(&card.image_alt)
    ));
    out.push_str(&format!("<h2>{}</h2>\n", encode_text(&card.title)));
    out.push_str(&format!(
        "<p class=\"ingredients\">{}</p>\n",
        encode_text(&card.ingredients_summary)
    ));
    out.push_str(&format!(
        "<span class=\"sr-only\">{}</span>\n",
        encode_text(LINK_LABEL)
    ));
    out.push_str("</article>\n</a>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_results_area() {
        let html = page("", &ResultsView::Idle);
        assert!(!html.contains("class=\"results\""));
        assert!(!html.contains(EMPTY_MESSAGE));
        assert!(html.contains(PLACEHOLDER));
    }

    #[test]
    fn test_card_markup() {
        let card = RecipeCard {
            title: "Haleem".to_string(),
            image_url: "https://img.example.com/h.jpg".to_string(),
            image_alt: "Haleem".to_string(),
            ingredients_summary: "wheat, lentils".to_string(),
            link: "https://example.com/haleem?a=1&b=2".to_string(),
        };
        assert_eq!(
            card_html(&card),
            "<a class=\"card\" href=\"https://example.com/haleem?a=1&amp;b=2\">\n\
             <article>\n\
             <img src=\"https://img.example.com/h.jpg\" alt=\"Haleem\" width=\"400\" height=\"300\">\n\
             <h2>Haleem</h2>\n\
             <p class=\"ingredients\">wheat, lentils</p>\n\
             <span class=\"sr-only\">View recipe</span>\n\
             </article>\n</a>\n"
        );
    }

    #[test]
    fn test_query_is_escaped() {
        let html = page("\"><script>alert(1)</script>", &ResultsView::Idle);
        assert!(!html.contains("<script>"));
    }
}
