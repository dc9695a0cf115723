//! HTTP completion provider
//!
//! Talks to an OpenAI-compatible completion gateway:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | chat, complete | `POST {base}/v1/chat/completions` |
//! | complete_stream | same, with `"stream": true`, read as Server-Sent Events |
//! | list_models | `GET {base}/v1/models` |
//!
//! The API key is sent as a Bearer token. Requests are not retried.
//!
//! # Error Handling
//!
//! | Status | Error |
//! |--------|-------|
//! | 401, 403 | `Authentication` |
//! | 404, or a `model_not_found` error code | `UnknownModel` |
//! | anything else unsuccessful | `Api` |

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};
use url::Url;

use crate::config::ProviderConfig;
use crate::error::{CompletionError, CompletionResult};
use crate::provider::{CompletionProvider, CompletionStream};
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, CompletionRequest, ModelInfo, Role, Usage,
};

/// Timeout for streaming requests, which stay open while text is generated
const STREAMING_TIMEOUT: Duration = Duration::from_secs(300);

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
const MODELS_PATH: &str = "/v1/models";

/// Completion provider backed by a remote HTTP API.
///
/// The client is `Clone`-able and reuses connections across requests.
#[derive(Clone)]
pub struct HttpCompletionProvider {
    base_url: Url,
    http: Client,
    api_key: String,
}

impl std::fmt::Debug for HttpCompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionProvider")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

#[derive(Serialize)]
struct WireChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

impl<'a> WireChatRequest<'a> {
    fn new(request: &'a ChatRequest, stream: bool) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream,
        }
    }
}

#[derive(Deserialize)]
struct WireMessage {
    role: Role,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct WireChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct WireDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireStreamChoice {
    delta: WireDelta,
}

#[derive(Deserialize)]
struct WireStreamChunk {
    #[serde(default)]
    choices: Vec<WireStreamChoice>,
    #[serde(default)]
    error: Option<WireErrorDetail>,
}

#[derive(Deserialize)]
struct WireModelList {
    data: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct WireErrorBody {
    error: WireErrorDetail,
}

#[derive(Deserialize)]
struct WireErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl HttpCompletionProvider {
    /// Create a provider from configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built. A placeholder key is accepted; the API will reject it.
    pub fn new(config: &ProviderConfig) -> CompletionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("toolgate/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                CompletionError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Self::with_http_client(config, http)
    }

    /// Create a provider around an existing HTTP client.
    pub fn with_http_client(config: &ProviderConfig, http: Client) -> CompletionResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            http,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> CompletionResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send_chat(
        &self,
        request: &ChatRequest,
        stream: bool,
    ) -> CompletionResult<reqwest::Response> {
        let url = self.endpoint(CHAT_COMPLETIONS_PATH)?;
        debug!(url = %url, model = %request.model, stream, "Sending chat completion");

        let mut builder = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&WireChatRequest::new(request, stream));
        if stream {
            builder = builder
                .timeout(STREAMING_TIMEOUT)
                .header("Accept", "text/event-stream");
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response, Some(&request.model)).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn chat(&self, request: ChatRequest) -> CompletionResult<ChatResponse> {
        let response = self.send_chat(&request, false).await?;
        let body = response.text().await?;
        let wire: WireChatResponse = serde_json::from_str(&body)?;

        let choice = wire.choices.into_iter().next().ok_or_else(|| CompletionError::Api {
            status: StatusCode::OK.as_u16(),
            message: "response contained no choices".to_string(),
        })?;

        Ok(ChatResponse {
            message: ChatMessage::new(choice.message.role, choice.message.content.unwrap_or_default()),
            model: wire.model.unwrap_or(request.model),
            usage: wire.usage,
            finish_reason: choice.finish_reason,
        })
    }

    async fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> CompletionResult<CompletionStream> {
        let request = ChatRequest::from(request);
        let response = self.send_chat(&request, true).await?;

        let (tx, rx) = tokio::sync::mpsc::channel::<CompletionResult<String>>(32);

        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            let mut pending = Vec::new();
            let mut buffer = String::new();

            while let Some(chunk_result) = stream.next().await {
                match chunk_result {
                    Ok(chunk) => {
                        pending.extend_from_slice(&chunk);
                        push_utf8(&mut pending, &mut buffer);

                        while let Some(event) = parse_sse_event(&mut buffer) {
                            if !forward_event(&tx, event).await {
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Err(CompletionError::transport(format!("Stream error: {}", e))))
                            .await;
                        return;
                    }
                }
            }

            // The final event may lack its blank-line terminator.
            if !buffer.trim().is_empty() {
                buffer.push_str("\n\n");
                while let Some(event) = parse_sse_event(&mut buffer) {
                    if !forward_event(&tx, event).await {
                        return;
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)))
    }

    async fn list_models(&self) -> CompletionResult<Vec<ModelInfo>> {
        let url = self.endpoint(MODELS_PATH)?;
        debug!(url = %url, "Listing models");

        let response = self.http.get(url).bearer_auth(&self.api_key).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response, None).await);
        }

        let body = response.text().await?;
        let list: WireModelList = serde_json::from_str(&body)?;
        Ok(list.data)
    }
}

/// One parsed Server-Sent Event from a chat completion stream.
#[derive(Debug, PartialEq)]
enum StreamEvent {
    Text(String),
    Done,
}

/// Send an event to the consumer. Returns false once the stream should stop.
async fn forward_event(
    tx: &tokio::sync::mpsc::Sender<CompletionResult<String>>,
    event: CompletionResult<StreamEvent>,
) -> bool {
    match event {
        Ok(StreamEvent::Text(text)) if text.is_empty() => true,
        Ok(StreamEvent::Text(text)) => tx.send(Ok(text)).await.is_ok(),
        Ok(StreamEvent::Done) => false,
        Err(e) => {
            let _ = tx.send(Err(e)).await;
            false
        }
    }
}

/// Move the longest valid UTF-8 prefix of `pending` into `buffer`.
///
/// A multi-byte character split across chunks stays in `pending` until the
/// rest arrives. Line endings are normalized to `\n`.
fn push_utf8(pending: &mut Vec<u8>, buffer: &mut String) {
    let valid = match std::str::from_utf8(pending) {
        Ok(text) => text.len(),
        Err(e) if e.error_len().is_some() => {
            warn!(error = %e, "Invalid UTF-8 in SSE stream");
            buffer.push_str(&String::from_utf8_lossy(pending));
            pending.clear();
            return;
        }
        Err(e) => e.valid_up_to(),
    };

    buffer.push_str(&String::from_utf8_lossy(&pending[..valid]));
    pending.drain(..valid);

    if buffer.contains('\r') {
        *buffer = buffer.replace("\r\n", "\n");
    }
}

/// Parse the next complete SSE event from a buffer and remove it.
///
/// Events without `data:` lines (comments, keep-alives) are skipped.
fn parse_sse_event(buffer: &mut String) -> Option<CompletionResult<StreamEvent>> {
    loop {
        let event_end = buffer.find("\n\n")?;
        let event: String = buffer.drain(..event_end + 2).collect();

        let data = event
            .lines()
            .filter_map(|line| line.strip_prefix("data:"))
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");

        if data.is_empty() {
            continue;
        }
        if data == "[DONE]" {
            return Some(Ok(StreamEvent::Done));
        }

        return Some(parse_stream_chunk(&data));
    }
}

fn parse_stream_chunk(data: &str) -> CompletionResult<StreamEvent> {
    let chunk: WireStreamChunk = serde_json::from_str(data).inspect_err(|e| {
        warn!(error = %e, "Failed to parse SSE event");
    })?;

    if let Some(error) = chunk.error {
        return Err(CompletionError::Api {
            status: StatusCode::OK.as_u16(),
            message: error.message,
        });
    }

    let text = chunk
        .choices
        .into_iter()
        .filter_map(|choice| choice.delta.content)
        .collect();
    Ok(StreamEvent::Text(text))
}

/// Map an unsuccessful response to an error.
async fn error_from_response(
    status: StatusCode,
    response: reqwest::Response,
    model: Option<&str>,
) -> CompletionError {
    let body = response.text().await.unwrap_or_default();
    classify_error(status, &body, model)
}

fn classify_error(status: StatusCode, body: &str, model: Option<&str>) -> CompletionError {
    let detail = serde_json::from_str::<WireErrorBody>(body).ok().map(|b| b.error);
    let message = match &detail {
        Some(detail) if !detail.message.is_empty() => detail.message.clone(),
        _ => body.trim().to_string(),
    };
    let model_not_found = detail
        .as_ref()
        .and_then(|d| d.code.as_deref())
        .is_some_and(|code| code == "model_not_found");

    match (status, model) {
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => {
            CompletionError::authentication(message)
        }
        (StatusCode::NOT_FOUND, Some(model)) => CompletionError::unknown_model(model),
        (_, Some(model)) if model_not_found => CompletionError::unknown_model(model),
        _ => CompletionError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
