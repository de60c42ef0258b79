use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::prompt::{PromptExecutor, PromptRequest, run_prompt};
use crate::prompts::summarize::{OUTPUT_FORMAT, PROMPT_NAME, build_summarize_prompt};
use crate::search::web::WebResult;

/// One result fed into a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySource {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl From<&WebResult> for SummarySource {
    fn from(result: &WebResult) -> Self {
        Self {
            title: result.title.clone().unwrap_or_default(),
            link: result.link.clone().unwrap_or_default(),
            snippet: result.snippet.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeInput {
    pub query: String,
    pub results: Vec<SummarySource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
}

/// Summarizes a result list for a query.
pub struct SummarizeFlow {
    executor: Arc<dyn PromptExecutor>,
}

impl SummarizeFlow {
    pub fn new(executor: Arc<dyn PromptExecutor>) -> Self {
        Self { executor }
    }

    /// An empty result list yields an empty summary without calling the model.
    pub async fn summarize(&self, input: &SummarizeInput) -> Result<SummaryOutput> {
        if input.results.is_empty() {
            return Ok(SummaryOutput {
                summary: String::new(),
            });
        }

        let request = PromptRequest::new(
            PROMPT_NAME,
            build_summarize_prompt(&input.query, &input.results),
            input,
            OUTPUT_FORMAT,
        )?;
        let output: SummaryOutput = run_prompt(self.executor.as_ref(), &request).await?;
        info!(query = %input.query, sources = input.results.len(), "summary ready");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_web_result_copies_fields() {
        let web = WebResult {
            title: Some("T".to_string()),
            link: Some("L".to_string()),
            snippet: Some("S".to_string()),
            position: Some(1),
        };
        let source = SummarySource::from(&web);
        assert_eq!(source.title, "T");
        assert_eq!(source.link, "L");
        assert_eq!(source.snippet, "S");
    }

    #[test]
    fn source_from_sparse_web_result_uses_empty_strings() {
        let source = SummarySource::from(&WebResult::default());
        assert_eq!(source, SummarySource::default());
    }
}
