use skim_core::{Result, SummaryResult};

pub mod client;
pub mod parser;

pub use client::ChatSummarizer;

/// Turns extracted article text into a summary and sentiment label.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the name of the backing model or service
    fn name(&self) -> &str;

    /// Summarizes the given article text
    async fn summarize(&self, text: &str) -> Result<SummaryResult>;
}

pub mod prelude {
    pub use super::{ChatSummarizer, Summarizer};
    pub use skim_core::{Error, Result, SummaryResult};
}
