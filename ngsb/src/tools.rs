//! Process-backed implementations of the external tool seams.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use angular_storybook_config::{FormatterConfig, GeneratorConfig};
use angular_storybook_core::{CodeFormatter, ComponentGenerator, GenerateOptions, ToolStatus};
use eyre::{Result, WrapErr};
use tracing::debug;

/// Runs Angular schematics through the configured command (`npm run ng --` by default).
pub struct AngularCli {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl AngularCli {
    pub fn new(config: &GeneratorConfig, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            cwd: cwd.into(),
        }
    }
}

impl ComponentGenerator for AngularCli {
    fn generate_module(&self, path: &str) -> Result<ToolStatus> {
        run(&self.program, &self.args, &["g", "m", path], &self.cwd)
    }

    fn generate_component(&self, path: &str, options: &GenerateOptions) -> Result<ToolStatus> {
        let mut extra = vec!["g", "c", path];
        if options.standalone {
            extra.push("--standalone");
        }
        if options.skip_tests {
            extra.push("--skip-tests");
        }
        run(&self.program, &self.args, &extra, &self.cwd)
    }
}

/// Runs the project formatter (`npm run prettier -- --loglevel=silent` by default).
pub struct Formatter {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl Formatter {
    pub fn new(config: &FormatterConfig, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            cwd: cwd.into(),
        }
    }
}

impl CodeFormatter for Formatter {
    fn format(&self) -> Result<ToolStatus> {
        run(&self.program, &self.args, &[], &self.cwd)
    }
}

/// Run a tool to completion with inherited stdio.
fn run(program: &str, args: &[String], extra: &[&str], cwd: &Path) -> Result<ToolStatus> {
    debug!(
        program,
        args = ?args,
        extra = ?extra,
        cwd = %cwd.display(),
        "running external tool"
    );

    let status = Command::new(program)
        .args(args)
        .args(extra)
        .current_dir(cwd)
        .status()
        .wrap_err_with(|| format!("Failed to run {}", program))?;

    Ok(ToolStatus::from(status))
}
