//! Server-Sent Events (SSE) decoding for streamed chat completions.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::GenerationError;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

const DONE_MARKER: &str = "data: [DONE]";

/// Turns a raw SSE byte stream into the text fragments it carries.
///
/// Chunks may split lines anywhere, so bytes are buffered until a newline
/// arrives. The stream ends at `data: [DONE]` or when the body closes.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, GenerationError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(GenerationError::Stream(e.to_string()));
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == DONE_MARKER {
                    return;
                }
                if let Some(content) = parse_sse_line(line) {
                    yield Ok(content);
                }
            }
        }

        // Some servers close the body without a trailing newline.
        if let Some(content) = parse_sse_line(buffer.trim()) {
            yield Ok(content);
        }
    }
}

/// Extracts the delta text from one `data:` line.
///
/// Returns `None` for comments, keep-alives, `[DONE]`, malformed JSON and
/// empty deltas.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data:")?.trim_start();

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}
