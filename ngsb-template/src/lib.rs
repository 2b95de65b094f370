//! Template lookup and rendering for the Angular Storybook scaffolding CLI.
//!
//! A template set is either the project's override directory or the set
//! bundled with the tool, never a mix of both. Each template is rendered by
//! plain token substitution and written next to the generated component.

mod error;
pub mod locate;
pub mod placeholders;
pub mod render;
mod template;

pub use error::{Result, TemplateError};
pub use locate::{TemplateSource, locate};
pub use placeholders::Placeholders;
pub use render::{RenderedFile, WriteOutcome, preview, render};
pub use template::{DIST_SUFFIX, NAME_TOKEN, TemplateFile};
