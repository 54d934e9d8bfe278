use ahash::AHashMap;
use itertools::Itertools;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("placeholder pattern is valid")
});

/// Replaces `{{name}}` placeholders in displayed text and commands.
pub struct VariableSubstitution;

impl VariableSubstitution {
    /// Substitutes every placeholder whose variable is set to a non-empty value.
    ///
    /// Unknown or empty variables leave the placeholder text in place. The template
    /// is scanned once; inserted values are never scanned again.
    pub fn substitute(template: &str, variables: &AHashMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                match variables.get(&caps[1]).filter(|v| !v.is_empty()) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Distinct names of the placeholders in `template` that would stay unresolved.
    pub fn unresolved<'t>(template: &'t str, variables: &AHashMap<String, String>) -> Vec<&'t str> {
        PLACEHOLDER
            .captures_iter(template)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| variables.get(*name).is_none_or(|v| v.is_empty()))
            .unique()
            .collect()
    }
}
