//! Placeholder tokenizer for replacement patterns

use once_cell::sync::Lazy;
use regex::Regex;

/// `{name}` or `{name?}`, name made of letters, digits and underscores
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)(\?)?\}").unwrap());

/// One placeholder occurrence in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// Exact matched text, braces included (`{name?}`)
    pub full_match: String,
    /// Field name with any `?` removed
    pub name: String,
    /// Whether the placeholder ended in `?`
    pub optional: bool,
}

/// Find every placeholder in `template`, left to right, duplicates included
pub fn parse_placeholders(template: &str) -> Vec<PlaceholderToken> {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .map(|caps| PlaceholderToken {
            full_match: caps[0].to_string(),
            name: caps[1].to_string(),
            optional: caps.get(2).is_some(),
        })
        .collect()
}
