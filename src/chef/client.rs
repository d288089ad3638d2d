use futures_util::{Stream, StreamExt};
use reqwest::Client;
use serde::Serialize;
use std::pin::Pin;

use super::GenerationError;
use super::sse_parser::sse_to_text_stream;
use crate::config::ResolvedConfig;

/// A service that turns a prompt into generated text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerationError>>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

type TextStream = Pin<Box<dyn Stream<Item = Result<String, GenerationError>> + Send>>;

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Built once at startup and reused for every request of the process.
pub struct ChefClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChefClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }

    /// Sends `prompt` as a single user message and streams back the reply.
    pub async fn generate_stream(&self, prompt: &str) -> Result<TextStream, GenerationError> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        tracing::debug!(%url, model = %self.model, prompt_len = prompt.len(), "sending completion request");

        let response = http_request
            .send()
            .await
            .map_err(|source| GenerationError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%status, "streaming completion");

        Ok(Box::pin(sse_to_text_stream(response.bytes_stream())))
    }
}

impl TextGenerator for ChefClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut stream = self.generate_stream(prompt).await?;
        let mut text = String::new();

        while let Some(chunk) = stream.next().await {
            text.push_str(&chunk?);
        }

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        tracing::debug!(response_len = text.len(), "completion finished");
        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let client = ChefClient::new(
            "https://generativelanguage.googleapis.com/v1beta/openai/".to_string(),
            "gemini-1.5-flash".to_string(),
            None,
        );
        assert_eq!(
            client.completions_url(),
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest {
            model: "gemini-1.5-flash",
            messages: [Message {
                role: "user",
                content: "How can I replace eggs in baking?",
            }],
            stream: true,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gemini-1.5-flash",
                "messages": [{"role": "user", "content": "How can I replace eggs in baking?"}],
                "stream": true
            })
        );
    }

    #[tokio::test]
    async fn test_generate_reports_unreachable_endpoint() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = ChefClient::new(
            "http://127.0.0.1:9".to_string(),
            "gemini-1.5-flash".to_string(),
            Some("test-key".to_string()),
        );

        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Connect { .. }));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
