//! Choosing the template set for a project.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use angular_storybook_core::paths::{TEMPLATE_DIR, TOOL_DIR};
use tracing::debug;

use crate::{Result, TemplateError, TemplateFile, template};

/// Where the templates for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The project's `.angular-storybook-cli/template` directory.
    Override(PathBuf),
    /// The templates bundled with the tool.
    Bundled,
}

/// Pick the template set for the app rooted at `app_root`.
///
/// The override directory wins whenever it exists and is a directory, even
/// if it is empty. Nothing is created on disk.
pub fn locate(app_root: &Path) -> TemplateSource {
    let dir = app_root.join(TOOL_DIR).join(TEMPLATE_DIR);

    if dir.is_dir() {
        debug!(path = %dir.display(), "using override templates");
        TemplateSource::Override(dir)
    } else {
        debug!(probed = %dir.display(), "using bundled templates");
        TemplateSource::Bundled
    }
}

impl TemplateSource {
    /// Load every template in the set, sorted by file name.
    ///
    /// Only regular files (or symlinks to them) directly inside an override
    /// directory are templates; subdirectories are skipped.
    pub fn load(&self) -> Result<Vec<TemplateFile>> {
        match self {
            TemplateSource::Bundled => Ok(template::bundled()),
            TemplateSource::Override(dir) => load_dir(dir),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Override(dir) => write!(f, "{}", dir.display()),
            TemplateSource::Bundled => f.write_str("bundled templates"),
        }
    }
}

fn load_dir(dir: &Path) -> Result<Vec<TemplateFile>> {
    let read_dir_err = |source| TemplateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut templates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if !path.is_file() {
            continue;
        }

        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TemplateError::InvalidName { path: path.clone() })?
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| TemplateError::ReadFile {
            path: path.clone(),
            source,
        })?;

        templates.push(TemplateFile::new(source_name, content));
    }

    templates.sort_by(|a, b| a.source_name.cmp(&b.source_name));
    Ok(templates)
}
