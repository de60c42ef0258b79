pub const PROMPT_NAME: &str = "searchQuerySuggestionsPrompt";
pub const OUTPUT_FORMAT: &str = r#"{"suggestions": ["suggested search query", "..."]}"#;

const INTRO: &str = "You are a search query suggestion engine. Given the current search query, suggest related search queries.";

pub fn build_suggestions_prompt(query: &str) -> String {
    format!("{INTRO}\n\nCurrent search query: {query}\n\nSuggestions:")
}
