use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use searchflows::config::Config;
use searchflows::flows::Flows;
use searchflows::flows::suggestions::SuggestionsInput;
use searchflows::flows::summarize::{SummarizeInput, SummarySource};
use searchflows::prompt::anthropic::AnthropicExecutor;
use searchflows::search::SearchInput;

#[derive(Parser)]
#[command(name = "searchflows", version, about = "Search the web, images, videos and news.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Organic web results
    Web { query: String },
    /// Image results
    Images { query: String },
    /// Video results
    Videos { query: String },
    /// News results
    News { query: String },
    /// Related search queries from the language model
    Suggest { query: String },
    /// Web search followed by a model-written summary of the results
    Summarize { query: String },
    /// Every vertical plus suggestions, fetched concurrently
    All { query: String },
}

#[derive(Serialize)]
struct ResultsPage<W, I, V, N> {
    query: String,
    web: W,
    images: I,
    videos: V,
    news: N,
    suggestions: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    if config.serper_api_key.is_none() {
        tracing::warn!("SERPER_API_KEY is not set; searches will return no results");
    }

    let client = reqwest::Client::new();
    let executor = Arc::new(AnthropicExecutor::new(client.clone(), &config));
    let flows = Flows::new(client, &config, executor);

    let json = match cli.command {
        Command::Web { query } => to_json(&flows.search_the_web(&SearchInput::new(query)).await, cli.compact)?,
        Command::Images { query } => to_json(&flows.search_images(&SearchInput::new(query)).await, cli.compact)?,
        Command::Videos { query } => to_json(&flows.search_videos(&SearchInput::new(query)).await, cli.compact)?,
        Command::News { query } => to_json(&flows.search_news(&SearchInput::new(query)).await, cli.compact)?,
        Command::Suggest { query } => {
            let output = flows
                .search_query_suggestions(&SuggestionsInput { query })
                .await
                .context("failed to get query suggestions")?;
            to_json(&output, cli.compact)?
        }
        Command::Summarize { query } => {
            let web = flows.search_the_web(&SearchInput::new(query.clone())).await;
            info!(sources = web.results.len(), "summarizing web results");
            let input = SummarizeInput {
                query,
                results: web.results.iter().map(SummarySource::from).collect(),
            };
            let output = flows
                .summarize_search_results(&input)
                .await
                .context("failed to summarize search results")?;
            to_json(&output, cli.compact)?
        }
        Command::All { query } => {
            let search = SearchInput::new(query.clone());
            let suggest = SuggestionsInput {
                query: query.clone(),
            };
            let (web, images, videos, news, suggestions) = futures::join!(
                flows.search_the_web(&search),
                flows.search_images(&search),
                flows.search_videos(&search),
                flows.search_news(&search),
                flows.search_query_suggestions(&suggest),
            );
            let suggestions = suggestions
                .context("failed to get query suggestions")?
                .suggestions;
            let page = ResultsPage {
                query,
                web,
                images,
                videos,
                news,
                suggestions,
            };
            to_json(&page, cli.compact)?
        }
    };

    println!("{}", json);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
