//! Path resolution inside an Angular workspace.
//!
//! The working directory a command is run from is split on the app prefix
//! ("src/app" by default) to find the application root, and the requested
//! component path is joined onto whatever lies beyond the prefix.

use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::naming::{ComponentName, is_separator};

/// Conventional location of application sources relative to the app root.
pub const DEFAULT_APP_PREFIX: &str = "src/app";

/// Per-project tool directory, relative to the app root.
pub const TOOL_DIR: &str = ".angular-storybook-cli";

/// Override template directory inside [`TOOL_DIR`].
pub const TEMPLATE_DIR: &str = "template";

/// Project configuration file inside [`TOOL_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Every path a `create` run needs, derived from a single working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Application root (the part of the working directory before the prefix).
    pub app_root: PathBuf,
    /// `app_root` joined with the app prefix.
    pub base: PathBuf,
    /// `base` joined with whatever followed the prefix in the working directory.
    pub component_base: PathBuf,
    /// `component_base` joined with the requested path.
    pub component: PathBuf,
    /// Last segment of the requested path.
    pub component_name: ComponentName,
    /// Whether the prefix was found in the working directory at all.
    pub prefix_found: bool,
}

impl ResolvedPaths {
    /// Component path relative to `base`, with a leading slash
    /// (e.g. "/widgets/price-tag"). This is the form handed to `ng generate`.
    pub fn generator_path(&self) -> String {
        match self.component.strip_prefix(&self.base) {
            Ok(relative) => {
                let segments: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect();
                format!("/{}", segments.join("/"))
            }
            Err(_) => self.component.display().to_string(),
        }
    }

    /// Override template directory for this project.
    pub fn template_override_dir(&self) -> PathBuf {
        self.app_root.join(TOOL_DIR).join(TEMPLATE_DIR)
    }

    /// Project configuration file for this project.
    pub fn config_file(&self) -> PathBuf {
        self.app_root.join(TOOL_DIR).join(CONFIG_FILE)
    }
}

/// Resolve all component paths from the working directory.
///
/// Never fails. If `app_prefix` does not occur in `app_path`, the whole of
/// `app_path` is treated as the app root and `prefix_found` is false.
pub fn resolve(app_path: &str, app_prefix: &str, requested: &str) -> ResolvedPaths {
    let split = if app_prefix.is_empty() {
        None
    } else {
        app_path.split_once(app_prefix)
    };
    let (before, after, prefix_found) = match split {
        Some((before, after)) => (before, after, true),
        None => (app_path, "", false),
    };

    let app_root = if app_prefix.is_empty() {
        normalize(before)
    } else {
        normalize(&before.replace(app_prefix, ""))
    };
    let base = join(&app_root, app_prefix);
    let component_base = join(&base, after);
    let component = join(&component_base, requested);

    ResolvedPaths {
        app_root,
        base,
        component_base,
        component,
        component_name: ComponentName::from_path(requested),
        prefix_found,
    }
}

/// Append a slash-separated relative path.
///
/// Leading separators in `rel` do not reset the path, `.` segments are
/// skipped and `..` removes the previous segment.
pub fn join(base: &Path, rel: &str) -> PathBuf {
    let mut out = base.to_path_buf();

    for segment in rel.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            _ => out.push(segment),
        }
    }

    out
}

fn normalize(path: &str) -> PathBuf {
    let start = if path.starts_with(is_separator) {
        PathBuf::from(MAIN_SEPARATOR_STR)
    } else {
        PathBuf::new()
    };
    join(&start, path)
}
