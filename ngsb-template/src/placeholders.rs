//! Placeholder tokens substituted into template content.

use angular_storybook_core::CaseVariants;
use indexmap::IndexMap;

pub const PASCAL_CASE_NAME: &str = "__PASCAL_CASE_NAME__";
pub const KEBAB_CASE_NAME: &str = "__KEBAB_CASE_NAME__";
pub const CAMEL_CASE_NAME: &str = "__CAMEL_CASE_NAME__";
pub const START_CASE_NAME: &str = "__START_CASE_NAME__";
pub const STORY_TITLE: &str = "__STORY_TITLE__";

/// Story title used when neither the command line nor the config sets one.
pub const DEFAULT_STORY_TITLE: &str = "Story";

/// Token to value mapping, applied in insertion order.
///
/// Tokens are matched literally and case-sensitively; every occurrence is
/// replaced. Text that looks like a token but is not registered is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: IndexMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard five tokens for a component.
    pub fn for_component(variants: &CaseVariants, story_title: &str) -> Self {
        Self::new()
            .with(PASCAL_CASE_NAME, &variants.pascal)
            .with(KEBAB_CASE_NAME, &variants.kebab)
            .with(CAMEL_CASE_NAME, &variants.camel)
            .with(START_CASE_NAME, &variants.start)
            .with(STORY_TITLE, story_title)
    }

    /// Add or replace a token. A replaced token keeps its original position.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(token.into(), value.into());
        self
    }

    /// Replace every registered token in `content`.
    pub fn apply(&self, content: &str) -> String {
        self.values
            .iter()
            .filter(|(token, _)| !token.is_empty())
            .fold(content.to_string(), |acc, (token, value)| {
                acc.replace(token.as_str(), value)
            })
    }
}
