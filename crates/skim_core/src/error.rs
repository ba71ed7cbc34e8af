use thiserror::Error;

/// Failure classes for the analysis pipeline. Each stage maps its own
/// failures explicitly; nothing propagates past the stage boundary untyped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Error fetching URL: {0}")]
    Fetch(String),

    #[error("Error rendering page: {0}")]
    Render(String),

    #[error("Error calling summarizer: {0}")]
    SummarizerTransport(String),

    #[error("Error decoding summarizer response: {0}")]
    SummarizerParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
