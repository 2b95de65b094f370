//! Project configuration for the Angular Storybook scaffolding CLI.
//!
//! A project can tune the tool with `.angular-storybook-cli/config.toml`
//! next to its override templates. Every key is optional.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Config, FormatterConfig, GeneratorConfig};
pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;
