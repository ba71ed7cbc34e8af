use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Placeholder name for items that failed before a title could be extracted.
pub const NAME_UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Static,
    Dynamic,
}

/// Readable content pulled out of a page. `text` is always
/// whitespace-normalized: runs of whitespace collapsed to single spaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
    pub method: ExtractionMethod,
}

/// What the model reply yielded. Either field may be missing on its own;
/// a partially-populated result is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: Option<String>,
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// One entry of the response array. Exactly one of two shapes: a success
/// carries the extracted title in `name` and no `error` key; a failure
/// carries `name = "N/A"`, no summary or sentiment, and a message in `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisItemResult {
    pub name: String,
    pub summary: Option<String>,
    pub sentiment: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisItemResult {
    pub fn success(title: String, result: SummaryResult, url: &str) -> Self {
        Self {
            name: title,
            summary: result.summary,
            sentiment: result.sentiment,
            url: url.to_string(),
            error: None,
        }
    }

    pub fn failure(url: &str, error: &Error) -> Self {
        Self {
            name: NAME_UNAVAILABLE.to_string(),
            summary: None,
            sentiment: None,
            url: url.to_string(),
            error: Some(error.to_string()),
        }
    }
}
