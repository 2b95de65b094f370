//! Create command report data structures.

use std::{fmt, path::PathBuf, process::ExitCode};

use angular_storybook_core::ToolStatus;
use angular_storybook_template::{RenderedFile, WriteOutcome};
use tracing::debug;

use super::output::{Output, Report};

/// Report data from scaffolding one component.
#[derive(Debug)]
pub struct CreateReport {
    /// Kebab-case component name.
    pub component: String,

    /// Directory the story files go into.
    pub component_dir: PathBuf,

    /// Where the templates came from.
    pub templates: String,

    /// Warnings collected along the way.
    pub warnings: Vec<String>,

    /// What happened.
    pub result: CreateResult,
}

/// Result of a create run.
#[derive(Debug)]
pub enum CreateResult {
    /// Story files were rendered and written (some writes may have failed).
    Written(Vec<WriteOutcome>),
    /// Dry-run preview; nothing was generated or written.
    Preview(Vec<RenderedFile>),
    /// An external generator step failed; nothing was rendered.
    Aborted {
        step: GenerateStep,
        status: ToolStatus,
    },
}

/// External generator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStep {
    Module,
    Component,
}

impl fmt::Display for GenerateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateStep::Module => f.write_str("module"),
            GenerateStep::Component => f.write_str("component"),
        }
    }
}

impl CreateReport {
    /// Number of story files that could not be written.
    pub fn failed_writes(&self) -> usize {
        match &self.result {
            CreateResult::Written(outcomes) => outcomes.iter().filter(|o| !o.is_created()).count(),
            _ => 0,
        }
    }

    /// Whether the component was generated and its templates rendered.
    pub fn generated(&self) -> bool {
        matches!(self.result, CreateResult::Written(_))
    }

    /// Process exit status for this report.
    ///
    /// A failed generator step passes its own code through. Failed story
    /// writes only count when `strict` is set.
    pub fn exit_status(&self, strict: bool) -> u8 {
        match &self.result {
            CreateResult::Aborted { status, .. } => {
                u8::try_from(status.code()).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ if strict && self.failed_writes() > 0 => 1,
            _ => 0,
        }
    }

    pub fn exit_code(&self, strict: bool) -> ExitCode {
        ExitCode::from(self.exit_status(strict))
    }
}

impl Report for CreateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            CreateResult::Written(outcomes) => {
                for outcome in outcomes {
                    match outcome {
                        WriteOutcome::Created(path) => out.created(&path.display().to_string()),
                        WriteOutcome::Failed { path, source } => {
                            debug!(path = %path.display(), error = %source, "write failed");
                            out.aborted(&path.display().to_string())
                        }
                    }
                }
            }
            CreateResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be created in {} from {}",
                    files.len(),
                    self.component_dir.display(),
                    self.templates
                ));
            }
            CreateResult::Aborted { step, status } => {
                out.error(&format!(
                    "generating {} '{}' failed with exit code {}",
                    step, self.component, status
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[derive(Default)]
    struct Recorded(Vec<String>);

    impl Output for Recorded {
        fn created(&mut self, path: &str) {
            self.0.push(format!("CREATE {path}"));
        }

        fn aborted(&mut self, path: &str) {
            self.0.push(format!("ABORT Cannot create {path}"));
        }

        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning: {msg}"));
        }

        fn error(&mut self, msg: &str) {
            self.0.push(format!("error: {msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.0.push(format!("-- {label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    fn report(result: CreateResult) -> CreateReport {
        CreateReport {
            component: "price-tag".to_string(),
            component_dir: PathBuf::from("/app/src/app/price-tag"),
            templates: "bundled templates".to_string(),
            warnings: Vec::new(),
            result,
        }
    }

    fn failed(path: &str) -> WriteOutcome {
        WriteOutcome::Failed {
            path: PathBuf::from(path),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
    }

    #[test]
    fn test_written_renders_one_line_per_file() {
        let mut report = report(CreateResult::Written(vec![
            WriteOutcome::Created(PathBuf::from("/d/price-tag.mdx")),
            failed("/d/price-tag.stories.ts"),
        ]));
        report.warnings.push("heads up".to_string());

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            vec![
                "warning: heads up",
                "CREATE /d/price-tag.mdx",
                "ABORT Cannot create /d/price-tag.stories.ts",
            ]
        );
    }

    #[test]
    fn test_failed_writes_exit_zero_unless_strict() {
        let report = report(CreateResult::Written(vec![
            WriteOutcome::Created(PathBuf::from("/d/a")),
            failed("/d/b"),
        ]));

        assert_eq!(report.failed_writes(), 1);
        assert!(report.generated());
        assert_eq!(report.exit_status(false), 0);
        assert_eq!(report.exit_status(true), 1);
    }

    #[test]
    fn test_aborted_passes_generator_code_through() {
        let report = report(CreateResult::Aborted {
            step: GenerateStep::Component,
            status: ToolStatus::new(4),
        });

        assert_eq!(report.exit_status(false), 4);
        assert_eq!(report.exit_status(true), 4);
        assert!(!report.generated());

        let mut out = Recorded::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            vec!["error: generating component 'price-tag' failed with exit code 4"]
        );
    }

    #[test]
    fn test_aborted_with_out_of_range_code_exits_one() {
        let report = report(CreateResult::Aborted {
            step: GenerateStep::Module,
            status: ToolStatus::new(-1),
        });

        assert_eq!(report.exit_status(false), 1);
    }

    #[test]
    fn test_preview_renders_files_and_summary() {
        let report = report(CreateResult::Preview(vec![RenderedFile {
            source_name: "component.mdx.dist".to_string(),
            path: PathBuf::from("/d/price-tag.mdx"),
            content: "# Price Tag".to_string(),
        }]));

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            vec![
                "-- /d/price-tag.mdx",
                "# Price Tag",
                "-- Summary",
                "1 files would be created in /app/src/app/price-tag from bundled templates",
            ]
        );
        assert_eq!(report.exit_status(true), 0);
        assert!(!report.generated());
    }

    #[test]
    fn test_abort_line_has_no_reason_suffix() {
        let report = report(CreateResult::Written(vec![failed("/d/price-tag.mdx")]));

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(out.0, vec!["ABORT Cannot create /d/price-tag.mdx"]);
    }
}
