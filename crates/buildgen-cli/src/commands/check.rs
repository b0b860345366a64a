//! Implementation of the `buildgen check` command.

use serde::Serialize;
use tracing::instrument;

use crate::{cli::CheckArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::{build_service, manifest_path};

/// Counts reported by a successful check.
#[derive(Debug, Serialize)]
struct CheckSummary {
    manifest: String,
    artifacts: usize,
    constants: usize,
    resource_tables: usize,
    accessors: usize,
}

/// Run a full generation pass and report only the outcome.
///
/// Failures propagate as errors so the exit code reflects them.
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = manifest_path(args.manifest, &config);
    let report = build_service(manifest.clone(), args.scheme, &config).generate()?;

    let summary = CheckSummary {
        manifest: manifest.display().to_string(),
        artifacts: report.artifacts.len(),
        constants: report.constant_count(),
        resource_tables: report.resources.len(),
        accessors: report.accessor_count(),
    };

    if output.is_json() {
        output.json(&summary)?;
    } else {
        output.success(&format!(
            "{} is valid: {} constants, {} accessors",
            summary.manifest, summary.constants, summary.accessors
        ))?;
    }
    Ok(())
}
