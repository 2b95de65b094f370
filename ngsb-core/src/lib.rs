//! Core utilities and types for the Angular Storybook scaffolding CLI.
//!
//! This crate holds the pure parts of the tool: deriving a component's
//! name variants, resolving where it lives inside an Angular workspace,
//! and the seams to the external tools that do the heavy lifting.

mod external;
mod file;
pub mod naming;
pub mod paths;

// External tool seams
pub use external::{CodeFormatter, ComponentGenerator, GenerateOptions, ToolStatus};
// File operations
pub use file::File;
// Naming
pub use naming::{CaseVariants, ComponentName};
// Paths
pub use paths::ResolvedPaths;
