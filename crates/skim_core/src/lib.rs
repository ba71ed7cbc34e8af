pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use types::{
    AnalysisItemResult, AnalyzeRequest, ExtractedArticle, ExtractionMethod, SummaryResult,
    NAME_UNAVAILABLE,
};

pub type Result<T> = std::result::Result<T, Error>;
