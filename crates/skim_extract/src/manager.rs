use std::sync::Arc;

use skim_core::{AnalysisItemResult, Result};
use skim_summarize::Summarizer;

use crate::content::ContentExtractor;

/// Runs the full pipeline (fetch → extract → summarize → parse) for each URL
/// in turn. A failure at any stage of one item becomes that item's error
/// entry; the batch keeps going and results come back in input order, one
/// per URL.
pub struct AnalysisManager {
    extractor: ContentExtractor,
    summarizer: Arc<dyn Summarizer>,
}

impl AnalysisManager {
    pub fn new(extractor: ContentExtractor, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    pub async fn analyze_urls(&self, urls: &[String]) -> Vec<AnalysisItemResult> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            match self.analyze_url(url).await {
                Ok(item) => results.push(item),
                Err(e) => {
                    tracing::warn!("analysis failed for {}: {}", url, e);
                    results.push(AnalysisItemResult::failure(url, &e));
                }
            }
        }
        results
    }

    async fn analyze_url(&self, url: &str) -> Result<AnalysisItemResult> {
        let article = self.extractor.extract(url).await?;
        tracing::debug!(
            "extracted {} chars from {} via {:?}",
            article.text.chars().count(),
            url,
            article.method
        );
        let summary = self.summarizer.summarize(&article.text).await?;
        Ok(AnalysisItemResult::success(article.title, summary, url))
    }
}
