mod commands;
mod logging;
mod ops;
mod reports;
mod tools;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(commands::exit_on_parse_error(&err)),
    };

    logging::init(cli.verbose);
    cli.run()
}
