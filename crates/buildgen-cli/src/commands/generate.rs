//! Implementation of the `buildgen generate` command.
//!
//! Responsibility: load the manifest through the core generation service and
//! render the resulting artifact descriptions. No generation rules live here.

use tracing::{info, instrument};

use buildgen_core::domain::{Artifact, GenerationReport, ResourceArtifact, ResourceValue};

use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::{build_service, manifest_path};

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = manifest_path(args.manifest, &config);
    let service = build_service(manifest.clone(), args.scheme, &config);

    let report = service.generate()?;
    info!(
        manifest = %manifest.display(),
        artifacts = report.artifacts.len(),
        resource_tables = report.resources.len(),
        "Generation finished"
    );

    let show_constants = !args.resources_only;
    let show_resources = !args.constants_only;

    if output.is_json() {
        return match (show_constants, show_resources) {
            (true, false) => Ok(output.json(&report.artifacts)?),
            (false, true) => Ok(output.json(&report.resources)?),
            _ => Ok(output.json(&report)?),
        };
    }

    if show_constants {
        for artifact in &report.artifacts {
            render_artifact(artifact, &output)?;
        }
    }
    if show_resources {
        for table in &report.resources {
            render_resources(table, &output)?;
        }
    }

    output.success(&summary(&report))?;
    Ok(())
}

fn render_artifact(artifact: &Artifact, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "{} ({} constants)",
        artifact.qualified_name(),
        artifact.len()
    ))?;
    output.table(&constant_rows(artifact))?;
    output.print("")?;
    Ok(())
}

fn render_resources(table: &ResourceArtifact, output: &OutputManager) -> CliResult<()> {
    let namespace = if table.namespace().is_empty() {
        "<root>"
    } else {
        table.namespace()
    };
    output.header(&format!("Resources: {namespace} ({} accessors)", table.len()))?;
    output.table(&accessor_rows(table))?;
    output.print("")?;
    Ok(())
}

fn constant_rows(artifact: &Artifact) -> Vec<Vec<String>> {
    artifact
        .iter()
        .map(|constant| {
            vec![
                constant.identifier().to_owned(),
                constant.kind().to_string(),
                constant.value().literal(),
            ]
        })
        .collect()
}

fn accessor_rows(table: &ResourceArtifact) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|accessor| {
            let kind = match accessor.value() {
                ResourceValue::Text(_) => "text",
                ResourceValue::Path(_) => "path",
            };
            vec![
                accessor.key().to_owned(),
                kind.to_owned(),
                accessor.value().as_str().to_owned(),
            ]
        })
        .collect()
}

fn summary(report: &GenerationReport) -> String {
    format!(
        "{} constants in {} artifact(s), {} accessors in {} resource table(s)",
        report.constant_count(),
        report.artifacts.len(),
        report.accessor_count(),
        report.resources.len()
    )
}
