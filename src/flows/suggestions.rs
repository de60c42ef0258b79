use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::prompt::{PromptExecutor, PromptRequest, run_prompt};
use crate::prompts::suggestions::{OUTPUT_FORMAT, PROMPT_NAME, build_suggestions_prompt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsInput {
    pub query: String,
}

/// Related queries in the order the model returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsOutput {
    pub suggestions: Vec<String>,
}

/// Suggests related search queries. Executor and schema failures
/// propagate to the caller.
pub struct SuggestionFlow {
    executor: Arc<dyn PromptExecutor>,
}

impl SuggestionFlow {
    pub fn new(executor: Arc<dyn PromptExecutor>) -> Self {
        Self { executor }
    }

    pub async fn suggest(&self, input: &SuggestionsInput) -> Result<SuggestionsOutput> {
        let request = PromptRequest::new(
            PROMPT_NAME,
            build_suggestions_prompt(&input.query),
            input,
            OUTPUT_FORMAT,
        )?;
        let output: SuggestionsOutput = run_prompt(self.executor.as_ref(), &request).await?;
        info!(query = %input.query, count = output.suggestions.len(), "suggestions ready");
        Ok(output)
    }
}
