//! Implementation of the `buildgen schemes` command.

use tracing::{info, instrument};

use buildgen_core::application::{GenerationService, SchemeInfo};

use crate::{cli::SchemesArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::{build_service, manifest_path};

/// List built-in schemes plus those a manifest registers.
///
/// Without an explicit manifest, a missing default manifest is not an error:
/// only the built-ins are listed.
#[instrument(skip_all)]
pub fn execute(args: SchemesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let schemes = if args.builtin {
        GenerationService::builtin_schemes()
    } else {
        let explicit = args.manifest.is_some();
        let manifest = manifest_path(args.manifest, &config);
        if !explicit && !manifest.exists() {
            info!(manifest = %manifest.display(), "No manifest found; listing built-in schemes");
            GenerationService::builtin_schemes()
        } else {
            build_service(manifest, None, &config).list_schemes()?
        }
    };

    if output.is_json() {
        output.json(&schemes)?;
        return Ok(());
    }

    for scheme in &schemes {
        output.header(&title(scheme))?;
        output.table(&mapping_rows(scheme))?;
        output.print("")?;
    }
    Ok(())
}

fn title(scheme: &SchemeInfo) -> String {
    if scheme.builtin {
        format!("{} (built-in)", scheme.id)
    } else {
        scheme.id.clone()
    }
}

fn mapping_rows(scheme: &SchemeInfo) -> Vec<Vec<String>> {
    scheme
        .mappings
        .iter()
        .map(|(role, identifier)| vec![role.as_str().to_owned(), identifier.clone()])
        .collect()
}
