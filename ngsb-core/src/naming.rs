//! Component naming.
//!
//! A component is identified by the last segment of the path it is created
//! at. Every name that ends up in a generated file is one of four case
//! variants of that identity, all derived from the same word split.

use std::fmt;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// The semantic name of a component: the last non-empty segment of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComponentName(String);

impl ComponentName {
    /// Take the last non-empty segment of `raw` (e.g. "widgets/price-tag" -> "price-tag").
    pub fn from_path(raw: &str) -> Self {
        let last = raw
            .split(is_separator)
            .filter(|segment| !segment.is_empty())
            .next_back()
            .unwrap_or_default();
        Self(last.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compute the case variants of this name.
    pub fn variants(&self) -> CaseVariants {
        CaseVariants::new(&self.0)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

/// The four spellings of a component name used by templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseVariants {
    /// "price-tag"
    pub kebab: String,
    /// "Price Tag"
    pub start: String,
    /// "priceTag"
    pub camel: String,
    /// "PriceTag"
    pub pascal: String,
}

impl CaseVariants {
    /// Derive all variants from a single name.
    ///
    /// The kebab form is computed first and the others are derived from it,
    /// so every variant agrees on where the word boundaries are.
    pub fn new(name: &str) -> Self {
        let kebab = to_kebab_case(name);
        let start = to_start_case(&kebab);
        let camel = to_camel_case(&kebab);
        let pascal = to_pascal_case(&kebab);

        Self {
            kebab,
            start,
            camel,
            pascal,
        }
    }

    /// Derive variants from the last segment of a path.
    pub fn from_path(raw: &str) -> Self {
        ComponentName::from_path(raw).variants()
    }
}

/// Split a string into words.
///
/// Boundaries are any non-alphanumeric character, a lowercase letter
/// followed by an uppercase one, the end of an acronym ("XMLHttp" ->
/// "XML", "Http") and any switch between digits and letters. Accents are
/// stripped first ("Résumé" -> "Resume") and apostrophes are dropped
/// without splitting ("don't" -> "dont").
pub fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = deburr(s)
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let next = chars.get(i + 1).copied();
            let lower_to_upper = p.is_lowercase() && c.is_uppercase();
            let acronym_end = p.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(|n| n.is_lowercase());
            let digit_switch = p.is_numeric() != c.is_numeric();

            if lower_to_upper || acronym_end || digit_switch {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
        prev = Some(c);
    }
    flush(&mut current, &mut words);

    words
}

/// Decompose and drop combining marks, so accented letters become their
/// base letter and never act as word boundaries.
fn deburr(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Convert a string to kebab-case (e.g., "PriceTag" -> "price-tag")
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a string to Start Case (e.g., "price-tag" -> "Price Tag")
pub fn to_start_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a string to camelCase (e.g., "price-tag" -> "priceTag")
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { upper_first(&lower) }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "price-tag" -> "PriceTag")
pub fn to_pascal_case(s: &str) -> String {
    upper_first(&to_camel_case(s))
}

// Uppercasing can change the length of the first character ("ßeta" ->
// "SSeta"), so pascal and camel may then differ by more than one char.
fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower_first(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_lowercase().chain(chars).collect(),
        }
    }

    #[test]
    fn test_component_name_from_path() {
        assert_eq!(ComponentName::from_path("widgets/price-tag").as_str(), "price-tag");
        assert_eq!(ComponentName::from_path("price-tag").as_str(), "price-tag");
        assert_eq!(ComponentName::from_path("widgets/price-tag/").as_str(), "price-tag");
        assert_eq!(ComponentName::from_path("/a//b").as_str(), "b");
        assert!(ComponentName::from_path("").is_empty());
        assert!(ComponentName::from_path("///").is_empty());
    }

    #[test]
    fn test_words() {
        assert_eq!(words("fooBar"), vec!["foo", "Bar"]);
        assert_eq!(words("FooBar"), vec!["Foo", "Bar"]);
        assert_eq!(words("foo_bar-baz qux"), vec!["foo", "bar", "baz", "qux"]);
        assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(words("foo2bar"), vec!["foo", "2", "bar"]);
        assert_eq!(words("h1Title"), vec!["h", "1", "Title"]);
        assert_eq!(words("__FOO__"), vec!["FOO"]);
        assert_eq!(words("don't"), vec!["dont"]);
        assert!(words("").is_empty());
        assert!(words("--").is_empty());
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("PriceTag"), "price-tag");
        assert_eq!(to_kebab_case("priceTag"), "price-tag");
        assert_eq!(to_kebab_case("price_tag"), "price-tag");
        assert_eq!(to_kebab_case("Foo Bar"), "foo-bar");
        assert_eq!(to_kebab_case("--foo--bar--"), "foo-bar");
        assert_eq!(to_kebab_case("widget2go"), "widget-2-go");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_accents_are_stripped_before_splitting() {
        assert_eq!(to_kebab_case("İstanbul"), "istanbul");
        assert_eq!(to_kebab_case("Re\u{301}sume\u{301}"), "resume");
        assert_eq!(to_kebab_case("Résumé"), "resume");
        assert_eq!(to_kebab_case("ÉcoleNormale"), "ecole-normale");
        assert_eq!(words("Ünïcode Wörds"), vec!["Unicode", "Words"]);
    }

    #[test]
    fn test_sharp_s_uppercases_to_two_chars() {
        let variants = CaseVariants::new("ßeta");
        assert_eq!(variants.camel, "ßeta");
        assert_eq!(variants.pascal, "SSeta");
    }

    #[test]
    fn test_to_start_case() {
        assert_eq!(to_start_case("price-tag"), "Price Tag");
        assert_eq!(to_start_case("fooBar"), "Foo Bar");
        assert_eq!(to_start_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("price-tag"), "priceTag");
        assert_eq!(to_camel_case("Foo Bar"), "fooBar");
        assert_eq!(to_camel_case("XMLHttpRequest"), "xmlHttpRequest");
        assert_eq!(to_camel_case("widget-2-go"), "widget2Go");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("price-tag"), "PriceTag");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_case_variants_for_foo_bar() {
        let variants = CaseVariants::new("Foo Bar");
        assert_eq!(variants.kebab, "foo-bar");
        assert_eq!(variants.start, "Foo Bar");
        assert_eq!(variants.camel, "fooBar");
        assert_eq!(variants.pascal, "FooBar");
    }

    #[test]
    fn test_case_variants_empty_input() {
        assert_eq!(CaseVariants::new(""), CaseVariants::default());
        assert_eq!(CaseVariants::from_path(""), CaseVariants::default());
    }

    #[test]
    fn test_case_variants_from_path_uses_last_segment() {
        let variants = CaseVariants::from_path("shared/ui/UserAvatar");
        assert_eq!(variants.kebab, "user-avatar");
        assert_eq!(variants.pascal, "UserAvatar");
    }

    #[test]
    fn test_case_variant_properties() {
        let inputs = [
            "price-tag",
            "PriceTag",
            "price tag",
            "XMLHttpRequest",
            "widget2go",
            "__private_thing__",
            "Ünïcode Wörds",
            "İstanbul",
            "Re\u{301}sume\u{301}",
            "Résumé",
            "a",
            "123",
        ];

        for input in inputs {
            let variants = CaseVariants::new(input);

            assert!(
                !variants.kebab.chars().any(|c| c.is_uppercase() || c.is_whitespace()),
                "kebab of {input:?} is {:?}",
                variants.kebab
            );
            assert_eq!(to_kebab_case(&variants.kebab), variants.kebab, "{input:?}");
            assert_eq!(variants.camel, lower_first(&variants.pascal), "{input:?}");

            if let Some(first) = variants.pascal.chars().next().filter(|c| c.is_alphabetic()) {
                assert!(first.is_uppercase(), "pascal of {input:?} is {:?}", variants.pascal);
            }
        }
    }
}
