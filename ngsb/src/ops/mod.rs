//! Core operations.
//!
//! This module contains the business logic for ngsb commands,
//! separated from CLI argument parsing and output rendering.

pub mod create;

pub use create::create;
