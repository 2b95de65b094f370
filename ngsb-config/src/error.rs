use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key` inside `[section]` when it can be found.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        section: Option<&str>,
        key: &str,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(&self.src, section, key),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config.toml")]
    #[diagnostic(
        code(ngsb::parse_error),
        help("see the `story_title`, `[generator]` and `[formatter]` keys")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ngsb::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Find the span of `key = ...` inside `[section]` (or the root table when `section` is `None`).
fn find_key_span(src: &str, section: Option<&str>, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    let mut in_section = section.is_none();

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();

        if trimmed.starts_with('[') {
            let header = trimmed.trim_end().trim_start_matches('[').trim_end_matches(']');
            in_section = section == Some(header.trim());
        } else if in_section {
            let is_key = trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            if is_key {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, key.len())));
            }
        }

        offset += line.len();
    }

    None
}
