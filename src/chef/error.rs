use thiserror::Error;

/// Failure reported by the text-generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Failed to connect to API endpoint {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("The model returned an empty response")]
    EmptyResponse,
}
