pub mod anthropic;
pub mod mock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One prompt invocation handed to a [`PromptExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    /// Stable prompt name, used in logs.
    pub name: &'static str,
    /// Rendered instruction text.
    pub instruction: String,
    /// The structured input the instruction was rendered from.
    pub input: Value,
    /// JSON shape the output must follow, shown to the model.
    pub output_format: &'static str,
}

impl PromptRequest {
    pub fn new<I: Serialize>(
        name: &'static str,
        instruction: String,
        input: &I,
        output_format: &'static str,
    ) -> Result<Self> {
        let input = serde_json::to_value(input)
            .with_context(|| format!("failed to serialize input for {name}"))?;
        Ok(Self {
            name,
            instruction,
            input,
            output_format,
        })
    }
}

/// Runs a language-model prompt and returns its JSON output.
/// Could be a hosted model or a test script.
#[async_trait]
pub trait PromptExecutor: Send + Sync {
    async fn execute(&self, request: &PromptRequest) -> Result<Value>;
}

/// Execute a prompt and validate its output against `T`.
/// Output that does not match the schema is an error.
pub async fn run_prompt<T: DeserializeOwned>(
    executor: &dyn PromptExecutor,
    request: &PromptRequest,
) -> Result<T> {
    let output = executor.execute(request).await?;
    serde_json::from_value(output)
        .with_context(|| format!("{} returned output that does not match its schema", request.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockExecutor;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Answer {
        value: u32,
    }

    fn request() -> PromptRequest {
        PromptRequest::new("testPrompt", "say a number".to_string(), &json!({}), r#"{"value": 0}"#)
            .unwrap()
    }

    #[tokio::test]
    async fn run_prompt_decodes_conforming_output() {
        let executor = MockExecutor::new(vec![Ok(json!({"value": 7}))]);
        let answer: Answer = run_prompt(&executor, &request()).await.unwrap();
        assert_eq!(answer.value, 7);
    }

    #[tokio::test]
    async fn run_prompt_rejects_nonconforming_output() {
        let executor = MockExecutor::new(vec![Ok(json!({"value": "seven"}))]);
        let err = run_prompt::<Answer>(&executor, &request()).await.unwrap_err();
        assert!(err.to_string().contains("testPrompt"));
    }

    #[tokio::test]
    async fn run_prompt_propagates_executor_error() {
        let executor = MockExecutor::new(vec![Err("model unavailable".to_string())]);
        let err = run_prompt::<Answer>(&executor, &request()).await.unwrap_err();
        assert!(err.to_string().contains("model unavailable"));
    }

    #[test]
    fn request_keeps_structured_input() {
        let req = PromptRequest::new("p", "text".to_string(), &json!({"query": "q"}), "{}").unwrap();
        assert_eq!(req.input["query"], "q");
    }
}
