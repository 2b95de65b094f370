use std::process::ExitCode;

use angular_storybook_config::ConfigFile;
use angular_storybook_core::paths;
use angular_storybook_template::placeholders::DEFAULT_STORY_TITLE;
use clap::{ArgAction, ArgGroup, Args};
use eyre::{Context, Result};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, create::CreateOptions},
    reports::{Output, Report, TerminalOutput},
    tools::{AngularCli, Formatter},
};

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["path", "path_flag"])))]
pub struct CreateCommand {
    /// Component path relative to the app directory (e.g. widgets/price-tag)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Component path, as an alternative to the positional argument
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path_flag: Option<String>,

    /// Create a standalone component (skips NgModule generation)
    #[arg(
        long,
        alias = "sa",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub standalone: bool,

    /// Create the component without spec files
    #[arg(
        long = "skip-tests",
        aliases = ["st", "skipTests"],
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub skip_tests: bool,

    /// Generate an NgModule too (same as --standalone=false)
    #[arg(long)]
    pub no_standalone: bool,

    /// Generate spec files (same as --skip-tests=false)
    #[arg(long)]
    pub no_skip_tests: bool,

    /// Story title (defaults to the config file value, then "Story")
    #[arg(short = 't', long = "story-title", aliases = ["storyTitle", "namespace"])]
    pub story_title: Option<String>,

    /// Directory marker that separates the app root from app sources
    #[arg(long, default_value = paths::DEFAULT_APP_PREFIX)]
    pub app_prefix: String,

    /// Print the story files instead of generating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when a story file could not be written
    #[arg(long)]
    pub strict: bool,
}

impl CreateCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let path = self
            .path
            .as_deref()
            .or(self.path_flag.as_deref())
            .unwrap_or_default();

        execute(Request {
            path,
            app_prefix: &self.app_prefix,
            standalone: self.standalone && !self.no_standalone,
            skip_tests: self.skip_tests && !self.no_skip_tests,
            story_title: self.story_title.as_deref(),
            dry_run: self.dry_run,
            strict: self.strict,
        })
    }
}

/// Everything a front-end collects before handing over to the create operation.
pub(super) struct Request<'a> {
    pub path: &'a str,
    pub app_prefix: &'a str,
    pub standalone: bool,
    pub skip_tests: bool,
    pub story_title: Option<&'a str>,
    pub dry_run: bool,
    pub strict: bool,
}

pub(super) fn execute(req: Request) -> Result<ExitCode> {
    let app_path = working_dir()?;
    let paths = paths::resolve(&app_path, req.app_prefix, req.path);
    let config_file = ConfigFile::load_or_default(paths.config_file()).unwrap_or_exit();
    debug!(
        path = %config_file.path().display(),
        found = config_file.exists(),
        "project config"
    );
    let config = config_file.config();

    let story_title = req
        .story_title
        .or(config.story_title.as_deref())
        .unwrap_or(DEFAULT_STORY_TITLE);

    let generator = AngularCli::new(&config.generator, &app_path);
    let report = ops::create(
        &paths,
        CreateOptions {
            standalone: req.standalone,
            skip_tests: req.skip_tests,
            story_title,
            dry_run: req.dry_run,
        },
        &generator,
    )?;

    let mut out = TerminalOutput::new();
    report.render(&mut out);

    if report.generated() && config.formatter.enabled {
        let formatter = Formatter::new(&config.formatter, &app_path);
        if let Some(warning) = ops::create::format(&formatter) {
            out.warning(&warning);
        }
    }

    Ok(report.exit_code(req.strict))
}

/// The directory the command was invoked from.
///
/// `INIT_CWD` wins when set, so running through an npm script still
/// resolves paths against the directory the user was in.
fn working_dir() -> Result<String> {
    if let Some(dir) = std::env::var_os("INIT_CWD").filter(|d| !d.is_empty()) {
        return Ok(dir.to_string_lossy().into_owned());
    }

    let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
    Ok(cwd.to_string_lossy().into_owned())
}
