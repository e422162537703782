use super::provider::{ChatProvider, FragmentStream};
use crate::error::ChatError;
use crate::types::Prompt;
use anyhow::Result;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::Client;
use serde_json::{json, Value};
use std::pin::Pin;
use std::time::Duration;

/// Client for Ollama's `/api/chat` endpoint.
pub struct OllamaProvider {
    client: Client,
    host: String,
}

impl OllamaProvider {
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
        })
    }

    fn request_body(prompt: &Prompt, stream: bool) -> Value {
        json!({
            "model": prompt.model,
            "messages": prompt.messages,
            "stream": stream,
        })
    }

    async fn send(&self, prompt: &Prompt, stream: bool) -> Result<reqwest::Response> {
        let url = format!("{}/api/chat", self.host);
        tracing::debug!(
            "POST {} (model: {}, messages: {}, stream: {})",
            url,
            prompt.model,
            prompt.messages.len(),
            stream
        );

        let response = self
            .client
            .post(&url)
            .json(&Self::request_body(prompt, stream))
            .send()
            .await
            .map_err(ChatError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Http { status, body }.into());
        }

        Ok(response)
    }
}

/// Content of one response object, or the error it carries.
fn message_content(value: &Value) -> Result<String, ChatError> {
    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| error.to_string());
        return Err(ChatError::Api(message));
    }

    Ok(value
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .unwrap_or_default()
        .to_string())
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    async fn chat(&self, prompt: &Prompt) -> Result<String> {
        let response = self.send(prompt, false).await?;
        let response_json: Value = response.json().await.map_err(ChatError::from)?;

        tracing::debug!(
            "Ollama response: {}",
            serde_json::to_string_pretty(&response_json).unwrap_or_else(|_| "{}".to_string())
        );

        if response_json.get("error").is_none() && response_json.get("message").is_none() {
            return Err(ChatError::MissingMessage.into());
        }

        Ok(message_content(&response_json)?)
    }

    async fn chat_stream(&self, prompt: &Prompt) -> Result<FragmentStream> {
        let response = self.send(prompt, true).await?;
        Ok(Box::pin(parse_ndjson_stream(response.bytes_stream())))
    }
}

/// Turns Ollama's newline-delimited JSON body into content fragments.
///
/// Ends after the object with `"done": true`, or when the body ends.
pub(crate) fn parse_ndjson_stream(
    stream: impl Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    use futures::stream::unfold;

    // Raw bytes: a multi-byte character may be split across chunks
    struct State {
        buffer: Vec<u8>,
        done: bool,
        stream: Pin<Box<dyn Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send>>,
    }

    let initial_state = State {
        buffer: Vec::new(),
        done: false,
        stream: Box::pin(stream),
    };

    unfold(initial_state, |mut state| async move {
        if state.done {
            return None;
        }

        loop {
            if let Some(pos) = state.buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = state.buffer.drain(..=pos).collect();
                let line = trim_ascii(&line);

                if line.is_empty() {
                    continue;
                }
                let item = parse_line(line, &mut state.done);
                return Some((item, state));
            }

            match state.stream.next().await {
                Some(Ok(chunk)) => {
                    state.buffer.extend_from_slice(&chunk);
                }
                Some(Err(e)) => {
                    state.done = true;
                    return Some((Err(ChatError::from(e).into()), state));
                }
                None => {
                    // Last object may arrive without a trailing newline
                    let rest = std::mem::take(&mut state.buffer);
                    let line = trim_ascii(&rest);
                    if line.is_empty() {
                        return None;
                    }
                    state.done = true;
                    let item = parse_line(line, &mut state.done);
                    return Some((item, state));
                }
            }
        }
    })
}

fn trim_ascii(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

fn parse_line(line: &[u8], done: &mut bool) -> Result<String> {
    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                "Failed to parse chunk: {} (data: {})",
                e,
                String::from_utf8_lossy(line)
            );
            *done = true;
            return Err(ChatError::from(e).into());
        }
    };

    if value.get("done").and_then(|d| d.as_bool()).unwrap_or(false) {
        *done = true;
    }

    message_content(&value).map_err(|e| {
        *done = true;
        e.into()
    })
}
