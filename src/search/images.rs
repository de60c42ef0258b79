//! Image results (`/images`).

use serde::{Deserialize, Serialize};

use super::{SearchAdapter, SearchOutput, Vertical};

pub struct Images;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Vertical for Images {
    type Record = ImageResult;

    const NAME: &'static str = "images";
    const PATH: &'static str = "/images";
    const FIELD: &'static str = "images";
}

pub type ImageSearchAdapter = SearchAdapter<Images>;
pub type ImageSearchOutput = SearchOutput<ImageResult>;
