use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{PromptExecutor, PromptRequest};
use crate::config::Config;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// A prompt executor backed by the Anthropic Messages API.
pub struct AnthropicExecutor {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl AnthropicExecutor {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.anthropic_api_key.clone(),
            model: config.model.clone(),
            api_url: API_URL.to_string(),
        }
    }

    /// Point the executor at a different Messages endpoint.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn build_system_prompt(request: &PromptRequest) -> String {
        format!(
            "Respond with ONLY valid JSON, no markdown fences, no extra text.\n\
             The JSON must have exactly this shape:\n{}",
            request.output_format
        )
    }

    fn parse_response(text: &str) -> Result<Value> {
        let json_str = extract_json(text);
        serde_json::from_str(json_str)
            .map_err(|e| anyhow::anyhow!("failed to parse LLM response as JSON: {}\nraw: {}", e, text))
    }
}

#[async_trait]
impl PromptExecutor for AnthropicExecutor {
    async fn execute(&self, request: &PromptRequest) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no Anthropic credentials found. Set ANTHROPIC_API_KEY."))?;

        info!(prompt = request.name, model = %self.model, "executing prompt");

        let system = Self::build_system_prompt(request);
        let messages = [Message {
            role: "user".to_string(),
            content: request.instruction.clone(),
        }];
        let body = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: &system,
            messages: &messages,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .context("Anthropic API request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("Anthropic API error ({}): {}", status, text);
        }

        let api_resp: ApiResponse = resp
            .json()
            .await
            .context("failed to decode Anthropic response")?;

        let text: String = api_resp
            .content
            .iter()
            .filter_map(|block| {
                if block.content_type == "text" {
                    block.text.as_deref()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            bail!("Anthropic API returned empty response");
        }

        if let Some(usage) = api_resp.usage {
            debug!(
                prompt = request.name,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "prompt token usage"
            );
        }

        Self::parse_response(&text)
    }
}

/// Extract JSON from text that may be wrapped in markdown code fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> PromptRequest {
        PromptRequest::new(
            "searchQuerySuggestionsPrompt",
            "suggest things".to_string(),
            &json!({"query": "rust"}),
            r#"{"suggestions": ["string"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_plain_json() {
        let value = AnthropicExecutor::parse_response(r#"{"summary": "ok"}"#).unwrap();
        assert_eq!(value, json!({"summary": "ok"}));
    }

    #[test]
    fn parse_fenced_json() {
        let text = "```json\n{\"suggestions\": [\"a\", \"b\"]}\n```";
        let value = AnthropicExecutor::parse_response(text).unwrap();
        assert_eq!(value["suggestions"][1], "b");
    }

    #[test]
    fn parse_invalid_json_fails() {
        let err = AnthropicExecutor::parse_response("not json at all").unwrap_err();
        assert!(err.to_string().contains("raw: not json at all"));
    }

    #[test]
    fn extract_json_plain() {
        assert_eq!(extract_json(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_with_plain_fence() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(input), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_trims_whitespace() {
        assert_eq!(extract_json("  \n {\"a\": 1}  \n "), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_no_closing_fence_returns_as_is() {
        let input = "```json\n{\"a\": 1}";
        assert_eq!(extract_json(input), input.trim());
    }

    #[test]
    fn system_prompt_includes_output_format() {
        let prompt = AnthropicExecutor::build_system_prompt(&request());
        assert!(prompt.contains(r#"{"suggestions": ["string"]}"#));
        assert!(prompt.contains("ONLY valid JSON"));
    }

    #[tokio::test]
    async fn missing_api_key_is_an_error() {
        let executor = AnthropicExecutor::new(reqwest::Client::new(), &Config::default());
        let err = executor.execute(&request()).await.unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }
}
