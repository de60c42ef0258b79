//! News results (`/news`).

use serde::{Deserialize, Serialize};

use super::{SearchAdapter, SearchOutput, Vertical};

pub struct News;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Vertical for News {
    type Record = NewsResult;

    const NAME: &'static str = "news";
    const PATH: &'static str = "/news";
    const FIELD: &'static str = "news";
}

pub type NewsSearchAdapter = SearchAdapter<News>;
pub type NewsSearchOutput = SearchOutput<NewsResult>;
