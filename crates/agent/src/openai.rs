//! Chat-completions client for OpenAI-compatible endpoints (OpenAI, Groq).

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use nora_core::config::LlmConfig;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::llm::{Completion, CompletionRequest, LlmClient};
use crate::message::{Message, ToolCall};
use crate::tools::ToolDescriptor;

const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

pub struct OpenAiCompatibleClient {
    http: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_retries: u32,
}

impl OpenAiCompatibleClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .with_context(|| format!("no api key configured for {}", config.provider.as_str()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build http client")?;
        let base_url = config.effective_base_url().trim_end_matches('/');

        Ok(Self {
            http,
            endpoint: format!("{base_url}/chat/completions"),
            api_key,
            model: config.effective_model().to_string(),
            temperature: config.temperature,
            max_retries: config.max_retries,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_once(&self, body: &ChatRequest<'_>) -> Result<ChatResponse, Attempt> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|error| {
                Attempt::Retryable(anyhow!("chat completion request failed: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let error = anyhow!("chat completion endpoint returned {status}: {}", excerpt(&detail));
            return Err(if is_retryable(status) {
                Attempt::Retryable(error)
            } else {
                Attempt::Fatal(error)
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|error| Attempt::Fatal(anyhow!("malformed chat completion response: {error}")))
    }
}

enum Attempt {
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion> {
        let body = ChatRequest::build(&self.model, self.temperature, request);

        let mut attempt = 0;
        let response = loop {
            match self.send_once(&body).await {
                Ok(response) => break response,
                Err(Attempt::Retryable(error)) if attempt < self.max_retries => {
                    let delay = RETRY_BASE_DELAY * 2u32.saturating_pow(attempt);
                    warn!(
                        event_name = "agent.llm.retry",
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "retrying chat completion"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(Attempt::Retryable(error) | Attempt::Fatal(error)) => return Err(error),
            }
        };

        let completion = response.into_completion()?;
        debug!(
            event_name = "agent.llm.completed",
            model = %self.model,
            tool_calls = completion.tool_calls.len(),
            "chat completion received"
        );
        Ok(completion)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool<'a>>,
}

impl<'a> ChatRequest<'a> {
    fn build(model: &'a str, temperature: f32, request: CompletionRequest<'a>) -> Self {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(WireMessage::text("system", request.system_prompt));
        messages.extend(request.messages.iter().map(WireMessage::from_message));

        Self {
            model,
            temperature,
            messages,
            tools: request.tools.iter().map(WireTool::from_descriptor).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl WireMessage {
    fn text(role: &'static str, content: &str) -> Self {
        Self {
            role,
            content: Some(content.to_string()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    fn from_message(message: &Message) -> Self {
        match message {
            Message::Human { content } => Self::text("user", content),
            Message::Assistant { content, tool_calls } => Self {
                role: "assistant",
                content: if content.is_empty() && !tool_calls.is_empty() {
                    None
                } else {
                    Some(content.clone())
                },
                tool_calls: tool_calls.iter().map(WireToolCall::from_call).collect(),
                tool_call_id: None,
            },
            Message::ToolResult { call_id, content } => Self {
                role: "tool",
                content: Some(content.clone()),
                tool_calls: Vec::new(),
                tool_call_id: Some(call_id.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type", default = "function_type")]
    kind: String,
    function: WireFunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

impl WireToolCall {
    fn from_call(call: &ToolCall) -> Self {
        Self {
            id: call.id.to_string(),
            kind: function_type(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Serialize)]
struct WireTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction<'a>,
}

#[derive(Debug, Serialize)]
struct WireFunction<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Value,
}

impl<'a> WireTool<'a> {
    fn from_descriptor(descriptor: &'a ToolDescriptor) -> Self {
        Self {
            kind: "function",
            function: WireFunction {
                name: &descriptor.name,
                description: &descriptor.description,
                parameters: &descriptor.parameters,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

impl ChatResponse {
    fn into_completion(self) -> Result<Completion> {
        let Some(choice) = self.choices.into_iter().next() else {
            bail!("chat completion response contained no choices");
        };

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolCall::new(call.id, call.function.name, call.function.arguments))
            .collect();

        Ok(Completion { content: choice.message.content.unwrap_or_default(), tool_calls })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use nora_core::config::{LlmConfig, LlmProvider};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::{ChatRequest, ChatResponse, OpenAiCompatibleClient};
    use crate::llm::{CompletionRequest, LlmClient};
    use crate::message::{Message, ToolCall, ToolCallId};
    use crate::tools::ToolDescriptor;

    #[test]
    fn request_uses_chat_completion_roles() {
        let messages = vec![
            Message::human("somewhere warm"),
            Message::assistant_with_calls(
                "",
                vec![ToolCall::new("call_1", "filter_itineraries", r#"{"weather":["tropical"]}"#)],
            ),
            Message::tool_result(ToolCallId::new("call_1"), "[]"),
        ];
        let tools = vec![ToolDescriptor {
            name: "filter_itineraries".to_string(),
            description: "Filter".to_string(),
            parameters: json!({ "type": "object" }),
        }];
        let request =
            CompletionRequest { system_prompt: "You are Nora", messages: &messages, tools: &tools };

        let body = serde_json::to_value(ChatRequest::build("gpt-4o", 0.0, request))
            .expect("serialize request");

        assert_eq!(body["messages"][0], json!({ "role": "system", "content": "You are Nora" }));
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][2]["content"], json!(null));
        assert_eq!(body["messages"][2]["tool_calls"][0]["type"], "function");
        assert_eq!(body["messages"][2]["tool_calls"][0]["function"]["name"], "filter_itineraries");
        assert_eq!(body["messages"][3]["role"], "tool");
        assert_eq!(body["messages"][3]["tool_call_id"], "call_1");
        assert_eq!(body["tools"][0]["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn request_omits_empty_tool_list() {
        let messages = vec![Message::human("hola")];
        let request = CompletionRequest { system_prompt: "hi", messages: &messages, tools: &[] };
        let body = serde_json::to_value(ChatRequest::build("m", 0.0, request)).expect("serialize");
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn response_maps_tool_calls_and_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_9",
                        "type": "function",
                        "function": { "name": "filter_itineraries", "arguments": "{}" }
                    }]
                }
            }]
        }))
        .expect("deserialize response");

        let completion = response.into_completion().expect("one choice");
        assert!(completion.content.is_empty());
        assert_eq!(
            completion.tool_calls,
            vec![ToolCall::new("call_9", "filter_itineraries", "{}")]
        );

        let empty: ChatResponse = serde_json::from_value(json!({ "choices": [] })).expect("parse");
        assert!(empty.into_completion().is_err());
    }

    #[test]
    fn client_requires_an_api_key_and_resolves_defaults() {
        let mut config = LlmConfig {
            provider: LlmProvider::Groq,
            api_key: None,
            base_url: None,
            model: None,
            temperature: 0.0,
            timeout_secs: 30,
            max_retries: 1,
        };
        assert!(OpenAiCompatibleClient::from_config(&config).is_err());

        config.api_key = Some("gsk-test".to_string().into());
        let client = OpenAiCompatibleClient::from_config(&config).expect("client builds");
        assert_eq!(client.model(), "llama-3.1-8b-instant");
        assert_eq!(client.endpoint, "https://api.groq.com/openai/v1/chat/completions");
    }

    fn local_config(base_url: String, max_retries: u32) -> LlmConfig {
        LlmConfig {
            provider: LlmProvider::OpenAi,
            api_key: Some("sk-test".to_string().into()),
            base_url: Some(base_url),
            model: Some("gpt-4o".to_string()),
            temperature: 0.0,
            timeout_secs: 5,
            max_retries,
        }
    }

    /// Answers every request with `status` and counts the requests received.
    async fn status_endpoint(status: u16) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local endpoint");
        let address = listener.local_addr().expect("local address");
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                read_request(&mut stream).await;
                counter.fetch_add(1, Ordering::SeqCst);

                let body = r#"{"error":{"message":"unavailable"}}"#;
                let response = format!(
                    "HTTP/1.1 {status} Status\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{address}"), hits)
    }

    async fn read_request(stream: &mut TcpStream) {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let Ok(read) = stream.read(&mut chunk).await else {
                return;
            };
            if read == 0 {
                return;
            }
            buffer.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&buffer);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buffer.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }

    async fn complete_once(client: &OpenAiCompatibleClient) -> anyhow::Result<()> {
        let messages = vec![Message::human("somewhere warm")];
        let request =
            CompletionRequest { system_prompt: "You are Nora", messages: &messages, tools: &[] };
        client.complete(request).await.map(|_| ())
    }

    #[tokio::test]
    async fn server_errors_and_rate_limits_are_retried_but_client_errors_are_not() {
        for (status, expected_hits) in [(500u16, 3usize), (429, 3), (400, 1)] {
            let (base_url, hits) = status_endpoint(status).await;
            let client = OpenAiCompatibleClient::from_config(&local_config(base_url, 2))
                .expect("client builds");

            let error = complete_once(&client).await.expect_err("endpoint always fails");

            assert!(error.to_string().contains(&format!("returned {status}")), "{error}");
            assert_eq!(hits.load(Ordering::SeqCst), expected_hits, "requests for {status}");
        }
    }

    #[tokio::test]
    async fn transport_errors_surface_after_retries() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local endpoint");
        let address = listener.local_addr().expect("local address");
        drop(listener);

        let config = local_config(format!("http://{address}"), 1);
        let client = OpenAiCompatibleClient::from_config(&config).expect("client builds");
        let error = complete_once(&client).await.expect_err("nothing is listening");

        assert!(error.to_string().contains("chat completion request failed"), "{error}");
    }
}
