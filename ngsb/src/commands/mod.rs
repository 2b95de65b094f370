mod create;
mod new;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use create::CreateCommand;
use eyre::Result;
use new::NewCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for angular_storybook_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print a clap error or help text and pick the exit code.
///
/// Help and version output exit 0; every usage error (unknown command,
/// missing path, bad value) exits 1.
pub(crate) fn exit_on_parse_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[derive(Parser)]
#[command(name = "ngsb")]
#[command(version)]
#[command(about = "Scaffold Angular components together with their Storybook stories")]
pub(crate) struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Create(cmd) => cmd.run(),
            Commands::New(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an Angular component together with its Storybook story
    #[command(visible_alias = "c")]
    Create(CreateCommand),

    /// Create a component from positional arguments: <PATH> [TITLE]
    New(NewCommand),
}
