use std::fmt;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;

use skim_core::{Config, Error, Result, SummaryResult};

use crate::parser;
use crate::Summarizer;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
/// Sends exactly one request per article; a transport fault or non-success
/// status fails the current item without retrying.
pub struct ChatSummarizer {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    bullet: String,
}

impl ChatSummarizer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            bullet: config.bullet.clone(),
        }
    }

    fn build_prompt(&self, text: &str) -> String {
        format!(
            "Article content:\n{text}\n\n\
             Please summarize this article in exactly 2-3 sentences using bullet points. \
             Then, provide the sentiment of the summary with one of these words: \
             positive, neutral, negative. Format your response like this:\n\
             Summary:\n\
             {bullet} [Sentence 1]\n\
             {bullet} [Sentence 2]\n\
             {bullet} [Sentence 3] (optional)\n\n\
             Sentiment: [Positive, Neutral, or Negative]",
            text = text,
            bullet = self.bullet,
        )
    }
}

impl fmt::Debug for ChatSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSummarizer")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait::async_trait]
impl Summarizer for ChatSummarizer {
    fn name(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, text: &str) -> Result<SummaryResult> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.build_prompt(text),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::SummarizerTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SummarizerTransport(format!(
                "{} returned HTTP {}",
                self.endpoint, status
            )));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| Error::SummarizerTransport(e.to_string()))?;

        tracing::debug!("summarizer replied with {} bytes", payload.len());
        parser::parse_completion(&payload)
    }
}
