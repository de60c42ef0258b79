use crate::flows::summarize::SummarySource;

pub const PROMPT_NAME: &str = "summarizeSearchResultsPrompt";
pub const OUTPUT_FORMAT: &str = r#"{"summary": "o resumo dos resultados da pesquisa"}"#;

const INTRO: &str = "Você é um assistente de pesquisa. Resuma os resultados da pesquisa a seguir para a consulta do usuário. Responda em português.";

/// Render the summarization instruction: the query, then one
/// title/snippet/link group per result in input order.
pub fn build_summarize_prompt(query: &str, results: &[SummarySource]) -> String {
    let mut listing = String::new();
    for result in results {
        listing.push_str(&format!(
            "- Título: {}\n  Snippet: {}\n  Link: {}\n",
            result.title, result.snippet, result.link
        ));
    }

    format!(
        "{INTRO}\n\nConsulta do usuário: {query}\n\nResultados da pesquisa:\n{listing}\nResumo conciso:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(n: u32) -> SummarySource {
        SummarySource {
            title: format!("title {n}"),
            link: format!("https://example.com/{n}"),
            snippet: format!("snippet {n}"),
        }
    }

    #[test]
    fn prompt_lists_every_result_in_order() {
        let prompt = build_summarize_prompt("rust", &[source(1), source(2)]);
        let first = prompt.find("- Título: title 1").unwrap();
        let second = prompt.find("- Título: title 2").unwrap();
        assert!(first < second);
        assert!(prompt.contains("  Snippet: snippet 2\n  Link: https://example.com/2"));
    }

    #[test]
    fn prompt_includes_query_and_cue() {
        let prompt = build_summarize_prompt("tokio runtime", &[source(1)]);
        assert!(prompt.contains("Consulta do usuário: tokio runtime"));
        assert!(prompt.ends_with("Resumo conciso:"));
        assert!(prompt.contains("Responda em português."));
    }
}
