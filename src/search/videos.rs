//! Video results (`/videos`).

use serde::{Deserialize, Serialize};

use super::{SearchAdapter, SearchOutput, Vertical};

pub struct Videos;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Vertical for Videos {
    type Record = VideoResult;

    const NAME: &'static str = "videos";
    const PATH: &'static str = "/videos";
    const FIELD: &'static str = "videos";
}

pub type VideoSearchAdapter = SearchAdapter<Videos>;
pub type VideoSearchOutput = SearchOutput<VideoResult>;
