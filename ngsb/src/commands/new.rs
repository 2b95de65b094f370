use std::process::ExitCode;

use angular_storybook_core::paths;
use clap::Args;
use eyre::Result;

use super::create::{Request, execute};

/// Positional front-end kept for scripts written against the legacy
/// `<path> [title]` calling convention. Always standalone, without tests.
#[derive(Args)]
pub struct NewCommand {
    /// Component path relative to the app directory
    pub path: String,

    /// Story title
    pub title: Option<String>,

    /// Directory marker that separates the app root from app sources
    #[arg(long, default_value = paths::DEFAULT_APP_PREFIX)]
    pub app_prefix: String,
}

impl NewCommand {
    pub fn run(&self) -> Result<ExitCode> {
        execute(Request {
            path: &self.path,
            app_prefix: &self.app_prefix,
            standalone: true,
            skip_tests: true,
            story_title: self.title.as_deref(),
            dry_run: false,
            strict: false,
        })
    }
}
