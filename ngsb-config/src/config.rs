use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Contents of `.angular-storybook-cli/config.toml`.
///
/// ```toml
/// story_title = "Components"
///
/// [generator]
/// program = "npx"
/// args = ["ng"]
///
/// [formatter]
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default for `--story-title`.
    #[serde(default)]
    pub story_title: Option<String>,

    /// Command used to run Angular schematics.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Command run after files are written.
    #[serde(default)]
    pub formatter: FormatterConfig,
}

/// How to invoke the Angular CLI. `g m <path>` / `g c <path> ...` are appended to `args`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["run".to_string(), "ng".to_string(), "--".to_string()],
        }
    }
}

/// How to format the project once the story files exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "npm".to_string(),
            args: ["run", "prettier", "--", "--loglevel=silent"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.story_title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ctx.validation_error("story_title must not be empty", None, "story_title"));
        }

        if self.generator.program.trim().is_empty() {
            return Err(ctx.validation_error(
                "generator program must not be empty",
                Some("generator"),
                "program",
            ));
        }

        if self.formatter.enabled && self.formatter.program.trim().is_empty() {
            return Err(ctx.validation_error(
                "formatter program must not be empty while the formatter is enabled",
                Some("formatter"),
                "program",
            ));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "config.toml")
    }
}
