//! Create operation - scaffold a component and its story files.

use angular_storybook_core::{CodeFormatter, ComponentGenerator, GenerateOptions, ResolvedPaths};
use angular_storybook_template::{Placeholders, locate, preview, render};
use eyre::{Context, Result, bail};
use tracing::debug;

use crate::reports::{CreateReport, CreateResult, GenerateStep};

/// Options for the create operation.
pub struct CreateOptions<'a> {
    /// Generate a standalone component (no NgModule step).
    pub standalone: bool,
    /// Ask the generator to skip spec files.
    pub skip_tests: bool,
    /// Value for the story title placeholder.
    pub story_title: &'a str,
    /// Render without running external tools or writing files.
    pub dry_run: bool,
}

/// Execute the create operation.
///
/// Runs the generator (module first unless standalone, then component) and
/// renders the story templates into the component directory. A failing
/// generator stops the run before anything is rendered; a failing write
/// only affects that one file. Formatting is a separate step, see [`format()`].
pub fn create(
    paths: &ResolvedPaths,
    opts: CreateOptions,
    generator: &dyn ComponentGenerator,
) -> Result<CreateReport> {
    if paths.component_name.is_empty() {
        bail!("The component path must end with a component name");
    }

    let mut warnings = Vec::new();
    if !paths.prefix_found {
        debug!(app_root = %paths.app_root.display(), "app prefix not found");
        warnings.push(format!(
            "app prefix not found in the working directory; using {} as the application root",
            paths.app_root.display()
        ));
    }

    let variants = paths.component_name.variants();
    let placeholders = Placeholders::for_component(&variants, opts.story_title);
    let source = locate(&paths.app_root);
    let templates = source
        .load()
        .wrap_err_with(|| format!("Failed to load templates from {}", source))?;

    let report = |warnings, result| CreateReport {
        component: variants.kebab.clone(),
        component_dir: paths.component.clone(),
        templates: source.to_string(),
        warnings,
        result,
    };

    if opts.dry_run {
        let files = preview(&templates, &paths.component, &variants, &placeholders);
        return Ok(report(warnings, CreateResult::Preview(files)));
    }

    let generator_path = paths.generator_path();
    debug!(path = %generator_path, standalone = opts.standalone, "generating component");

    if !opts.standalone {
        let status = generator
            .generate_module(&generator_path)
            .wrap_err("Failed to run the module generator")?;
        if !status.success() {
            let result = CreateResult::Aborted {
                step: GenerateStep::Module,
                status,
            };
            return Ok(report(warnings, result));
        }
    }

    let options = GenerateOptions {
        standalone: opts.standalone,
        skip_tests: opts.skip_tests,
    };
    let status = generator
        .generate_component(&generator_path, &options)
        .wrap_err("Failed to run the component generator")?;
    if !status.success() {
        let result = CreateResult::Aborted {
            step: GenerateStep::Component,
            status,
        };
        return Ok(report(warnings, result));
    }

    let outcomes = render(&templates, &paths.component, &variants, &placeholders);
    Ok(report(warnings, CreateResult::Written(outcomes)))
}

/// Run the formatter once the story files are written.
///
/// The formatter's outcome never fails the run; a problem comes back as a
/// warning for the caller to print.
pub fn format(formatter: &dyn CodeFormatter) -> Option<String> {
    match formatter.format() {
        Ok(status) if !status.success() => Some(format!("formatter exited with code {}", status)),
        Ok(_) => None,
        Err(e) => Some(format!("formatter could not be run: {}", e)),
    }
}
