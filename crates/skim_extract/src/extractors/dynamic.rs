use scraper::{Html, Selector};

use skim_core::{ExtractedArticle, ExtractionMethod};

use super::{normalize_whitespace, NO_TITLE};

/// Title candidates, most specific first. News templates put the visible
/// headline in an `h1.headline` that often differs from `<title>`.
const TITLE_SELECTORS: [&str; 2] = ["h1.headline", "title"];

/// Article body candidates, evaluated in order; the first selector that
/// matches an element wins and later candidates are never merged in.
pub const BODY_SELECTORS: [&str; 6] = [
    "article",
    "div.c-post-content",
    "div.news-release-content",
    "div.content",
    "div#content",
    "body",
];

/// Body text used when not even `<body>` matched.
pub const NO_BODY_TEXT: &str = "No article text found";

/// Extracts (title, text) from browser-rendered HTML using the ordered
/// selector fallback chains above.
pub struct DynamicExtractor;

impl DynamicExtractor {
    pub fn extract(html: &str) -> ExtractedArticle {
        let document = Html::parse_document(html);

        let title = first_match(&document, &TITLE_SELECTORS)
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let text = first_match(&document, &BODY_SELECTORS)
            .map(|text| normalize_whitespace(&text))
            .unwrap_or_else(|| NO_BODY_TEXT.to_string());

        ExtractedArticle {
            title,
            text,
            method: ExtractionMethod::Dynamic,
        }
    }
}

/// Returns the text of the first element matched by the first selector in
/// `selectors` that matches anything.
fn first_match(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        document
            .select(&Selector::parse(selector).unwrap())
            .next()
            .map(|el| el.text().collect::<String>())
    })
}
