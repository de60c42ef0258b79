//! Runtime configuration.
//!
//! Built once at the composition root and handed to the flows. Nothing
//! below this module reads the process environment.

use crate::consts::{
    DEFAULT_LOCALE, DEFAULT_MODEL, ENV_ANTHROPIC_API_KEY, ENV_ANTHROPIC_MODEL,
    ENV_SEARCH_LOCALE, ENV_SERPER_API_KEY, ENV_SERPER_BASE_URL, SERPER_BASE_URL,
};

/// Settings for the search verticals and the prompt executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Serper key. `None` makes every search degrade to an empty list.
    pub serper_api_key: Option<String>,
    pub serper_base_url: String,
    pub locale: String,
    pub anthropic_api_key: Option<String>,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serper_api_key: None,
            serper_base_url: SERPER_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            anthropic_api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read settings from the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            serper_api_key: get(ENV_SERPER_API_KEY),
            serper_base_url: get(ENV_SERPER_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.serper_base_url),
            locale: get(ENV_SEARCH_LOCALE).unwrap_or(defaults.locale),
            anthropic_api_key: get(ENV_ANTHROPIC_API_KEY),
            model: get(ENV_ANTHROPIC_MODEL).unwrap_or(defaults.model),
        }
    }
}
