//! Rendering templates into a component directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use angular_storybook_core::{CaseVariants, File};
use tracing::debug;

use crate::{Placeholders, TemplateFile};

/// A template rendered for a specific component, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Name of the template it came from.
    pub source_name: String,
    /// Destination path.
    pub path: PathBuf,
    /// Content with placeholders substituted.
    pub content: String,
}

/// Outcome of writing one rendered file.
#[derive(Debug)]
pub enum WriteOutcome {
    Created(PathBuf),
    Failed { path: PathBuf, source: io::Error },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Created(path) | WriteOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, WriteOutcome::Created(_))
    }
}

/// Render every template into `destination` without touching the disk.
pub fn preview(
    templates: &[TemplateFile],
    destination: &Path,
    variants: &CaseVariants,
    placeholders: &Placeholders,
) -> Vec<RenderedFile> {
    templates
        .iter()
        .map(|template| RenderedFile {
            source_name: template.source_name.clone(),
            path: destination.join(template.destination_name(&variants.kebab)),
            content: placeholders.apply(&template.content),
        })
        .collect()
}

/// Render and write every template into `destination`.
///
/// A failed write is recorded and the remaining templates are still
/// written. The destination directory must already exist.
pub fn render(
    templates: &[TemplateFile],
    destination: &Path,
    variants: &CaseVariants,
    placeholders: &Placeholders,
) -> Vec<WriteOutcome> {
    preview(templates, destination, variants, placeholders)
        .into_iter()
        .map(|rendered| {
            let file = File::new(rendered.path, rendered.content);
            match file.write() {
                Ok(()) => {
                    debug!(
                        template = %rendered.source_name,
                        path = %file.path().display(),
                        "created"
                    );
                    WriteOutcome::Created(file.path().to_path_buf())
                }
                Err(source) => {
                    debug!(
                        template = %rendered.source_name,
                        path = %file.path().display(),
                        error = %source,
                        "write failed"
                    );
                    WriteOutcome::Failed {
                        path: file.path().to_path_buf(),
                        source,
                    }
                }
            }
        })
        .collect()
}
