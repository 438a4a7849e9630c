/// Upper bound the CMS focus keyword field accepts.
pub const MAX_KEYWORDS_LEN: usize = 191;

pub const SYSTEM_PROMPT: &str = "You are a helpful SEO assistant";

pub fn build_prompt(team_names: &str, title: &str) -> String {
    format!(
        r#"Return only a JSON object formatted like:
{{
    "content": ["...", "..."],
    "meta_description": "...",
    "keywords": "...",
    "description": ["...", "..."]
}}
For content, generate multiple short name variations for {team_names} to optimize search queries, including abbreviations, nicknames, and different spellings.
For meta_description and keywords, use combinations of the team names with this title: {title}.
For description, generate multiple short name variations for {title} to optimize search queries, including abbreviations, nicknames, and different spellings.
The keywords should be relevant to the content and title and must be at most {MAX_KEYWORDS_LEN} characters long."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_prompt("Lakers, LA Lakers", "2024 Season Preview");

        assert!(prompt.contains("variations for Lakers, LA Lakers to optimize"));
        assert!(prompt.contains("with this title: 2024 Season Preview."));
        assert!(prompt.contains("variations for 2024 Season Preview to optimize"));
    }

    #[test]
    fn test_prompt_names_all_keys_and_limit() {
        let prompt = build_prompt("Celtics", "Finals Recap");

        for key in ["content", "meta_description", "keywords", "description"] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing {key}");
        }
        assert!(prompt.contains("at most 191 characters"));
    }

    #[test]
    fn test_prompt_keeps_braces_in_inputs() {
        let prompt = build_prompt("{Team}", "Title {x}");
        assert!(prompt.contains("{Team}"));
        assert!(prompt.contains("Title {x}"));
    }
}
