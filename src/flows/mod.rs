//! Caller-facing surface: the six flows behind one composition root.
//!
//! The four search flows always return a value. The two prompt flows
//! return `Result` and surface executor or schema failures.

pub mod suggestions;
pub mod summarize;

use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::prompt::PromptExecutor;
use crate::search::SearchInput;
use crate::search::images::{ImageSearchAdapter, ImageSearchOutput};
use crate::search::news::{NewsSearchAdapter, NewsSearchOutput};
use crate::search::videos::{VideoSearchAdapter, VideoSearchOutput};
use crate::search::web::{WebSearchAdapter, WebSearchOutput};

use suggestions::{SuggestionFlow, SuggestionsInput, SuggestionsOutput};
use summarize::{SummarizeFlow, SummarizeInput, SummaryOutput};

pub struct Flows {
    web: WebSearchAdapter,
    images: ImageSearchAdapter,
    videos: VideoSearchAdapter,
    news: NewsSearchAdapter,
    suggestions: SuggestionFlow,
    summarize: SummarizeFlow,
}

impl Flows {
    /// Wire every flow from one config. `client` is shared by all search verticals.
    pub fn new(client: reqwest::Client, config: &Config, executor: Arc<dyn PromptExecutor>) -> Self {
        Self {
            web: WebSearchAdapter::new(client.clone(), config),
            images: ImageSearchAdapter::new(client.clone(), config),
            videos: VideoSearchAdapter::new(client.clone(), config),
            news: NewsSearchAdapter::new(client, config),
            suggestions: SuggestionFlow::new(executor.clone()),
            summarize: SummarizeFlow::new(executor),
        }
    }

    pub async fn search_the_web(&self, input: &SearchInput) -> WebSearchOutput {
        self.web.search(input).await
    }

    pub async fn search_images(&self, input: &SearchInput) -> ImageSearchOutput {
        self.images.search(input).await
    }

    pub async fn search_videos(&self, input: &SearchInput) -> VideoSearchOutput {
        self.videos.search(input).await
    }

    pub async fn search_news(&self, input: &SearchInput) -> NewsSearchOutput {
        self.news.search(input).await
    }

    pub async fn search_query_suggestions(
        &self,
        input: &SuggestionsInput,
    ) -> Result<SuggestionsOutput> {
        self.suggestions.suggest(input).await
    }

    pub async fn summarize_search_results(&self, input: &SummarizeInput) -> Result<SummaryOutput> {
        self.summarize.summarize(input).await
    }

    /// Direct access to the web adapter, e.g. for [`try_search`](crate::search::SearchAdapter::try_search).
    pub fn web(&self) -> &WebSearchAdapter {
        &self.web
    }
}
