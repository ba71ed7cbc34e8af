use serde::Deserialize;

use skim_core::{Error, Result, SummaryResult};

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Decodes a raw chat-completion payload and recovers (summary, sentiment)
/// from the reply text. A payload that is not valid JSON, or that lacks
/// `choices[0].message.content`, is a parse error; a reply missing either
/// marker is not.
pub fn parse_completion(payload: &str) -> Result<SummaryResult> {
    let envelope: ChatResponse = serde_json::from_str(payload)
        .map_err(|e| Error::SummarizerParse(e.to_string()))?;
    let content = envelope
        .choices
        .first()
        .map(|choice| choice.message.content.as_str())
        .ok_or_else(|| Error::SummarizerParse("response has no choices".to_string()))?;
    Ok(parse_reply(content))
}

/// Single forward pass over the reply lines. The markers may appear in
/// either order; the first occurrence of each wins. Lines are trimmed before
/// the prefix check, so indented replies still parse.
pub fn parse_reply(content: &str) -> SummaryResult {
    let lines: Vec<&str> = content.lines().collect();
    let mut summary = None;
    let mut sentiment = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if let Some(rest) = line.strip_prefix("Sentiment:") {
            if sentiment.is_none() {
                sentiment = Some(rest.trim().to_string());
            }
            i += 1;
        } else if line.starts_with("Summary:") && summary.is_none() {
            let mut parts = Vec::new();
            i += 1;
            while i < lines.len() {
                let part = lines[i].trim();
                if part.is_empty() || part.starts_with("Sentiment:") || part.starts_with("Summary:")
                {
                    break;
                }
                parts.push(part);
                i += 1;
            }
            if !parts.is_empty() {
                summary = Some(parts.join("\n"));
            }
        } else {
            i += 1;
        }
    }

    SummaryResult { summary, sentiment }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_summary_and_sentiment() {
        let content = "Summary:\n• One.\n• Two.\n\nSentiment: positive";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("• One.\n• Two."));
        assert_eq!(result.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_parse_reply_missing_sentiment() {
        let content = "Summary:\n• Only a summary here.";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("• Only a summary here."));
        assert!(result.sentiment.is_none());
    }

    #[test]
    fn test_parse_reply_missing_summary() {
        let result = parse_reply("Sentiment: Negative");
        assert!(result.summary.is_none());
        assert_eq!(result.sentiment.as_deref(), Some("Negative"));
    }

    #[test]
    fn test_parse_reply_markers_in_reverse_order() {
        let content = "Sentiment: neutral\nSummary:\n• Late summary.";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("• Late summary."));
        assert_eq!(result.sentiment.as_deref(), Some("neutral"));
    }

    #[test]
    fn test_parse_reply_indented_markers() {
        let content = "    Summary:\n        ^ Indented bullet.\n\n    Sentiment: positive";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("^ Indented bullet."));
        assert_eq!(result.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_parse_reply_stops_summary_at_sentiment_line() {
        let content = "Summary:\n• One.\nSentiment: positive\n• Stray bullet.";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("• One."));
        assert_eq!(result.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_parse_reply_first_markers_win() {
        let content = "Sentiment: positive\nSentiment: negative\nSummary:\n• First.\n\nSummary:\n• Second.";
        let result = parse_reply(content);
        assert_eq!(result.summary.as_deref(), Some("• First."));
        assert_eq!(result.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_parse_reply_empty_summary_section_is_absent() {
        let result = parse_reply("Summary:\n\nSentiment: neutral");
        assert!(result.summary.is_none());
        assert_eq!(result.sentiment.as_deref(), Some("neutral"));
    }

    #[test]
    fn test_parse_reply_sentiment_keeps_text_after_first_colon() {
        let result = parse_reply("Sentiment:  Positive ");
        assert_eq!(result.sentiment.as_deref(), Some("Positive"));
    }

    #[test]
    fn test_parse_completion_happy_path() {
        let payload = serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Summary:\n• A thing happened.\n\nSentiment: neutral"
                }
            }]
        })
        .to_string();
        let result = parse_completion(&payload).unwrap();
        assert_eq!(result.summary.as_deref(), Some("• A thing happened."));
        assert_eq!(result.sentiment.as_deref(), Some("neutral"));
    }

    #[test]
    fn test_parse_completion_rejects_invalid_json() {
        let err = parse_completion("not json").unwrap_err();
        assert!(matches!(err, Error::SummarizerParse(_)));
    }

    #[test]
    fn test_parse_completion_rejects_empty_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, Error::SummarizerParse(_)));
    }

    #[test]
    fn test_parse_completion_rejects_missing_content_path() {
        let err = parse_completion(r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::SummarizerParse(_)));
    }
}
