use scraper::{Html, Selector};

use skim_core::{ExtractedArticle, ExtractionMethod};

use super::{normalize_whitespace, NO_TITLE};

/// Extracts (title, text) from plain fetched HTML. Always produces a result:
/// a missing `<title>` becomes the sentinel title and a page with no text
/// nodes yields an empty text.
pub struct StaticExtractor;

impl StaticExtractor {
    pub fn extract(html: &str) -> ExtractedArticle {
        let document = Html::parse_document(html);

        let title = document
            .select(&Selector::parse("title").unwrap())
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        // Visible text lives under <body>; the parser synthesizes one even
        // for fragments, so the root fallback is a guard, not a code path.
        let text = document
            .select(&Selector::parse("body").unwrap())
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_else(|| document.root_element().text().collect::<String>());

        ExtractedArticle {
            title,
            text: normalize_whitespace(&text),
            method: ExtractionMethod::Static,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_and_normalized_text() {
        let html = "<html><head><title>T</title></head><body>  a   b\nc </body></html>";
        let article = StaticExtractor::extract(html);
        assert_eq!(article.title, "T");
        assert_eq!(article.text, "a b c");
        assert_eq!(article.method, ExtractionMethod::Static);
    }

    #[test]
    fn test_extract_without_title_uses_sentinel() {
        let html = "<html><head></head><body>  a   b\nc </body></html>";
        let article = StaticExtractor::extract(html);
        assert_eq!(article.title, NO_TITLE);
        assert_eq!(article.text, "a b c");
    }

    #[test]
    fn test_extract_is_deterministic() {
        let html = r#"<html><head><title>Stable</title></head>
            <body><p>First   paragraph.</p> <p>Second
            paragraph.</p></body></html>"#;
        let first = StaticExtractor::extract(html);
        let second = StaticExtractor::extract(html);
        assert_eq!(first.title, second.title);
        assert_eq!(first.text, second.text);
        assert_eq!(first.text, "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_extract_first_title_wins() {
        let html =
            "<html><head><title>First</title><title>Second</title></head><body></body></html>";
        let article = StaticExtractor::extract(html);
        assert_eq!(article.title, "First");
    }
}
