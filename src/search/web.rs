//! Organic web results (`/search`).

use serde::{Deserialize, Serialize};

use super::{SearchAdapter, SearchOutput, Vertical};

pub struct Web;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Vertical for Web {
    type Record = WebResult;

    const NAME: &'static str = "web";
    const PATH: &'static str = "/search";
    const FIELD: &'static str = "organic";
}

pub type WebSearchAdapter = SearchAdapter<Web>;
pub type WebSearchOutput = SearchOutput<WebResult>;
