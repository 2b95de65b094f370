/// Literal in a template file name that is replaced by the kebab-case name.
pub const NAME_TOKEN: &str = "component";

/// Marker suffix for files that must not be picked up as sources in the
/// template directory itself; stripped from the destination name.
pub const DIST_SUFFIX: &str = ".dist";

/// A single template: its file name and raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub source_name: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(source_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            content: content.into(),
        }
    }

    /// Destination file name for a component (e.g. "component.mdx.dist" -> "price-tag.mdx").
    pub fn destination_name(&self, kebab: &str) -> String {
        let name = self.source_name.replacen(NAME_TOKEN, kebab, 1);
        match name.strip_suffix(DIST_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }
}

/// Templates shipped with the tool, sorted by name.
pub(crate) fn bundled() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new(
            "component.mdx.dist",
            include_str!("../template/component.mdx.dist"),
        ),
        TemplateFile::new(
            "component.stories.ts.dist",
            include_str!("../template/component.stories.ts.dist"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name_strips_dist() {
        let file = TemplateFile::new("component.txt.dist", "");
        assert_eq!(file.destination_name("my-widget"), "my-widget.txt");
    }

    #[test]
    fn test_destination_name_without_dist() {
        let file = TemplateFile::new("component.stories.ts", "");
        assert_eq!(file.destination_name("price-tag"), "price-tag.stories.ts");
    }

    #[test]
    fn test_destination_name_replaces_first_token_only() {
        let file = TemplateFile::new("component.component.html", "");
        assert_eq!(file.destination_name("card"), "card.component.html");
    }

    #[test]
    fn test_destination_name_only_strips_trailing_dist() {
        let file = TemplateFile::new("component.dist.md", "");
        assert_eq!(file.destination_name("card"), "card.dist.md");
    }

    #[test]
    fn test_bundled_templates_are_sorted_and_named() {
        let names: Vec<_> = bundled().into_iter().map(|t| t.source_name).collect();

        assert_eq!(names, vec!["component.mdx.dist", "component.stories.ts.dist"]);
        assert!(names.iter().all(|n| n.contains(NAME_TOKEN)));
    }
}
