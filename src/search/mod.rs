//! Serper search verticals.
//!
//! One generic [`SearchAdapter`] does the HTTP round trip; each vertical
//! only declares its endpoint path, the top-level response field holding
//! the result array, and the record shape copied out of each element.
//!
//! [`SearchAdapter::search`] never fails: every error is logged and turned
//! into an empty result list. Callers that need to tell "no results" apart
//! from "the search failed" use [`SearchAdapter::try_search`].

pub mod images;
pub mod news;
pub mod videos;
pub mod web;

use std::marker::PhantomData;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::consts::SERPER_API_KEY_HEADER;

/// Caller input shared by every vertical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub query: String,
}

impl SearchInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Caller output: the vertical's records in upstream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutput<R> {
    pub results: Vec<R>,
}

impl<R> SearchOutput<R> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

/// JSON body posted to every Serper endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
    pub hl: &'a str,
}

/// Describes one Serper search vertical.
pub trait Vertical: Send + Sync + 'static {
    /// Result record projected from each upstream element.
    type Record: DeserializeOwned + Serialize + Send + Sync;

    /// Short name used in logs.
    const NAME: &'static str;
    /// Endpoint path appended to the base URL.
    const PATH: &'static str;
    /// Top-level response field holding the result array.
    const FIELD: &'static str;

    fn request_body<'a>(query: &'a str, locale: &'a str) -> SearchRequest<'a> {
        SearchRequest {
            q: query,
            hl: locale,
        }
    }
}

/// Why a search produced no results.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("SERPER_API_KEY is not set")]
    MissingApiKey,
    #[error("Serper request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Serper API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to parse Serper response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single-attempt Serper client for one vertical. Holds no per-call state.
pub struct SearchAdapter<V: Vertical> {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    locale: String,
    vertical: PhantomData<fn() -> V>,
}

impl<V: Vertical> SearchAdapter<V> {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.serper_base_url.trim_end_matches('/').to_string(),
            api_key: config.serper_api_key.clone(),
            locale: config.locale.clone(),
            vertical: PhantomData,
        }
    }

    /// Full URL this adapter posts to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, V::PATH)
    }

    /// Run the search, degrading any failure to an empty result list.
    pub async fn search(&self, input: &SearchInput) -> SearchOutput<V::Record> {
        match self.try_search(&input.query).await {
            Ok(results) => SearchOutput { results },
            Err(e) => {
                error!(vertical = V::NAME, error = %e, "failed to fetch search results");
                SearchOutput::empty()
            }
        }
    }

    /// Run the search and report failures instead of swallowing them.
    pub async fn try_search(&self, query: &str) -> Result<Vec<V::Record>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        info!(vertical = V::NAME, query, "Serper search");

        let resp = self
            .client
            .post(self.endpoint())
            .header(SERPER_API_KEY_HEADER, api_key)
            .json(&V::request_body(query, &self.locale))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body = resp.text().await?;
        let results: Vec<V::Record> = extract_results(&body, V::FIELD)?;

        info!(vertical = V::NAME, query, count = results.len(), "Serper search complete");
        Ok(results)
    }
}

/// Pull `field` out of a response body and project each element into `R`.
/// A missing or null field is an empty list.
pub fn extract_results<R: DeserializeOwned>(
    body: &str,
    field: &str,
) -> Result<Vec<R>, serde_json::Error> {
    let mut data: Value = serde_json::from_str(body)?;
    match data.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items),
    }
}
