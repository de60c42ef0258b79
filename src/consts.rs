//! Project-wide constants.

/// Serper API root. Each vertical appends its own path.
pub const SERPER_BASE_URL: &str = "https://google.serper.dev";

/// Interface language sent as `hl` with every search.
pub const DEFAULT_LOCALE: &str = "pt";

/// Header carrying the Serper API key.
pub const SERPER_API_KEY_HEADER: &str = "X-API-KEY";

/// Default Anthropic model for prompt execution.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

pub const ENV_SERPER_API_KEY: &str = "SERPER_API_KEY";
pub const ENV_SERPER_BASE_URL: &str = "SERPER_BASE_URL";
pub const ENV_SEARCH_LOCALE: &str = "SEARCH_LOCALE";
pub const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!SERPER_BASE_URL.is_empty());
        assert!(!DEFAULT_LOCALE.is_empty());
        assert!(!DEFAULT_MODEL.is_empty());
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!SERPER_BASE_URL.ends_with('/'));
        assert!(SERPER_BASE_URL.starts_with("https://"));
    }
}
