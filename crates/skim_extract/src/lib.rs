pub mod content;
pub mod extractors;
pub mod fetch;
pub mod manager;
pub mod render;

pub use content::ContentExtractor;
pub use extractors::{DynamicExtractor, StaticExtractor};
pub use fetch::{FetchPage, HttpFetcher};
pub use manager::AnalysisManager;
pub use render::{ChromeRenderer, RenderPage};

pub mod prelude {
    pub use super::{AnalysisManager, ContentExtractor, FetchPage, RenderPage};
    pub use skim_core::{Error, ExtractedArticle, Result};
}
