use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors raised while loading a template set.
///
/// Rendering itself never fails as a whole; see [`crate::WriteOutcome`].
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read template '{path}'")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template file name is not valid UTF-8: '{path}'")]
    InvalidName { path: PathBuf },
}
