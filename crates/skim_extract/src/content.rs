use std::sync::Arc;

use skim_core::{ExtractedArticle, Result};

use crate::extractors::{DynamicExtractor, StaticExtractor};
use crate::fetch::FetchPage;
use crate::render::RenderPage;

/// Two-stage extraction: a fast static parse, accepted when it yields enough
/// text, with a full browser render as the fallback. When the fallback runs,
/// the static title and text are discarded entirely; the two results are
/// never merged.
pub struct ContentExtractor {
    fetcher: Arc<dyn FetchPage>,
    renderer: Arc<dyn RenderPage>,
    sufficiency_threshold: usize,
}

impl ContentExtractor {
    pub fn new(
        fetcher: Arc<dyn FetchPage>,
        renderer: Arc<dyn RenderPage>,
        sufficiency_threshold: usize,
    ) -> Self {
        Self {
            fetcher,
            renderer,
            sufficiency_threshold,
        }
    }

    pub async fn extract(&self, url: &str) -> Result<ExtractedArticle> {
        let html = self.fetcher.fetch(url).await?;
        let article = StaticExtractor::extract(&html);

        let chars = article.text.chars().count();
        if chars >= self.sufficiency_threshold {
            tracing::debug!("static extraction sufficient for {} ({} chars)", url, chars);
            return Ok(article);
        }

        tracing::debug!(
            "static extraction too short for {} ({} < {} chars), falling back to rendering",
            url,
            chars,
            self.sufficiency_threshold
        );
        let rendered = self.renderer.render(url).await?;
        Ok(DynamicExtractor::extract(&rendered))
    }
}
