//! Seams to the external tools a `create` run drives.
//!
//! The component's own source is produced by an external generator
//! (`ng generate` by default) and the result is tidied by an external
//! formatter. Only the operations the scaffolding flow needs are modelled
//! here; how a tool is invoked is up to the implementation.

use std::{fmt, process::ExitStatus};

use eyre::Result;

/// Exit status of an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus(i32);

impl ToolStatus {
    pub const SUCCESS: Self = Self(0);

    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ToolStatus {
    /// A process killed by a signal has no exit code and maps to 1.
    fn from(status: ExitStatus) -> Self {
        Self(status.code().unwrap_or(1))
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options forwarded to component generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Generate a standalone component (no NgModule).
    pub standalone: bool,
    /// Omit spec files.
    pub skip_tests: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            skip_tests: true,
        }
    }
}

/// Generates the Angular module and component a story is written for.
///
/// `Err` means the tool could not be run at all; a tool that ran and failed
/// reports a non-successful [`ToolStatus`].
pub trait ComponentGenerator {
    /// Generate an NgModule at `path`.
    fn generate_module(&self, path: &str) -> Result<ToolStatus>;

    /// Generate a component at `path`.
    fn generate_component(&self, path: &str, options: &GenerateOptions) -> Result<ToolStatus>;
}

/// Formats the project after files were written.
pub trait CodeFormatter {
    fn format(&self) -> Result<ToolStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_status() {
        assert!(ToolStatus::SUCCESS.success());
        assert!(!ToolStatus::new(4).success());
        assert_eq!(ToolStatus::new(4).code(), 4);
        assert_eq!(ToolStatus::new(127).to_string(), "127");
    }

    #[test]
    fn test_generate_options_default() {
        let options = GenerateOptions::default();
        assert!(options.standalone);
        assert!(options.skip_tests);
    }
}
