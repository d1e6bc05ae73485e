use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

use crate::palette::ColorMap;

lazy_static! {
    /// A complete `{{name}}` token. Matching the whole token keeps `{{bg}}`
    /// from ever touching `{{bg1}}`.
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

/// Replace every `{{key}}` in `template` with its color from `colors`.
///
/// Single pass: inserted values are never rescanned. Tokens with no entry in
/// `colors` are left verbatim.
pub fn substitute(template: &str, colors: &ColorMap) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match colors.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of all placeholders referenced by a template
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Placeholders in `template` that `colors` cannot fill
pub fn unresolved<'a>(template: &'a str, colors: &ColorMap) -> Vec<&'a str> {
    placeholders(template)
        .into_iter()
        .filter(|name| !colors.contains_key(*name))
        .collect()
}
