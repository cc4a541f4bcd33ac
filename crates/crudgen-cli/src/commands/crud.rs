//! `crudgen crud`: generate every artifact for one entity.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crudgen_adapters::{ArtisanScaffolder, LocalFilesystem, StubScaffolder};
use crudgen_core::{
    application::{
        ArtifactOutcome, CrudRequest, GenerateService, GenerationOutcome, GenerationReport,
        PreparedRun, Scaffolder, prepare,
    },
    domain::{LayoutPaths, ProjectLayout, layout::migration_suffix},
};

use crate::{
    cli::CrudArgs,
    config::{AppConfig, ScaffolderBackend},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Marker file of a project the artisan backend can drive.
const ARTISAN_SCRIPT: &str = "artisan";

#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(args: CrudArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config);
    let root = std::env::current_dir().with_cli_context(|| "Failed to read working directory")?;
    let layout =
        ProjectLayout::new(&root, config.paths.clone()).map_err(|e| CliError::Core(e.into()))?;

    if args.dry_run {
        let prepared = prepare(&request)?;
        return print_preview(&prepared, &layout, &output);
    }

    let backend = args.scaffolder.unwrap_or(config.scaffold.backend);
    let scaffolder = build_scaffolder(backend, &config, &layout)?;
    debug!(?backend, root = %root.display(), "starting generation");

    let service = GenerateService::new(Box::new(LocalFilesystem::new()), scaffolder, layout);
    let report = service.generate(&request);

    if output.is_json() {
        output.json(&report)?;
    } else {
        print_report(&report, &root, &output)?;
    }

    finish(report)
}

fn build_request(args: &CrudArgs, config: &AppConfig) -> CrudRequest {
    let matching = args
        .enum_rules
        .map(Into::into)
        .unwrap_or(config.rules.enum_matching);

    CrudRequest::new(&args.entity)
        .fields(&args.fields)
        .relations(&args.relations)
        .enum_matching(matching)
}

fn build_scaffolder(
    backend: ScaffolderBackend,
    config: &AppConfig,
    layout: &ProjectLayout,
) -> CliResult<Box<dyn Scaffolder>> {
    let filesystem = Box::new(LocalFilesystem::new());
    match backend {
        ScaffolderBackend::Artisan => {
            let moved = artisan_fixed_paths_moved(&config.paths);
            if !moved.is_empty() {
                return Err(CliError::ConfigError {
                    message: format!(
                        "the artisan backend always writes to Laravel's default directories; \
                         reset paths.{} or use --scaffolder stub",
                        moved.join(", paths.")
                    ),
                    source: None,
                });
            }
            if !layout.root().join(ARTISAN_SCRIPT).is_file() {
                return Err(CliError::ProjectNotFound {
                    path: layout.root().to_path_buf(),
                });
            }
            Ok(Box::new(ArtisanScaffolder::new(
                filesystem,
                layout.clone(),
                &config.scaffold.php_binary,
            )))
        }
        ScaffolderBackend::Stub => Ok(Box::new(StubScaffolder::new(filesystem, layout.clone()))),
    }
}

/// Path keys whose target `php artisan make:*` cannot be told about.
fn artisan_fixed_paths_moved(paths: &LayoutPaths) -> Vec<&'static str> {
    let defaults = LayoutPaths::default();
    [
        ("models_dir", &paths.models_dir, &defaults.models_dir),
        ("requests_dir", &paths.requests_dir, &defaults.requests_dir),
        ("migrations_dir", &paths.migrations_dir, &defaults.migrations_dir),
    ]
    .into_iter()
    .filter(|(_, configured, default)| configured != default)
    .map(|(key, _, _)| key)
    .collect()
}

/// Map the report outcome to the process result.
fn finish(report: GenerationReport) -> CliResult<()> {
    match report.outcome {
        GenerationOutcome::Success => {
            info!(entity = %report.entity, "generation completed");
            Ok(())
        }
        GenerationOutcome::Fatal { error } => Err(CliError::Core(error)),
        GenerationOutcome::PartialFailure { stage, error } => Err(CliError::GenerationIncomplete {
            stage,
            source: error,
        }),
    }
}

fn print_report(report: &GenerationReport, root: &Path, output: &OutputManager) -> CliResult<()> {
    for artifact in &report.artifacts {
        output.item(
            outcome_label(&artifact.outcome),
            &relative(&artifact.path, root).display().to_string(),
        )?;
    }

    for warning in &report.warnings {
        output.warning(warning)?;
    }

    if report.is_success() {
        output.success(&format!("CRUD generation completed for {}", report.entity))?;
    }
    Ok(())
}

fn outcome_label(outcome: &ArtifactOutcome) -> &'static str {
    match outcome {
        ArtifactOutcome::Created => "created",
        ArtifactOutcome::Patched => "patched",
        ArtifactOutcome::MarkerNotFound { .. } => "skipped",
        ArtifactOutcome::Appended => "appended",
        ArtifactOutcome::AlreadyRegistered => "exists",
    }
}

fn relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn print_preview(
    prepared: &PreparedRun,
    layout: &ProjectLayout,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(prepared)?;
        return Ok(());
    }

    let name = &prepared.entity;
    let bp = &prepared.blueprint;
    let root = layout.root();
    let migration = layout
        .migrations_dir()
        .join(format!("<timestamp>_{}", migration_suffix(name)));

    let sections = [
        (layout.entity_file(name), bp.entity.insertion()),
        (migration, bp.schema_columns.clone()),
        (layout.controller_file(name), bp.controller.clone()),
        (layout.request_file(name), bp.validation_rules.clone()),
        (layout.routes_file(), bp.route.line.clone()),
    ];

    output.header(&format!("Dry run for {} (nothing written)", name.studly()))?;
    for (path, text) in sections {
        output.print("")?;
        output.info(&relative(&path, root).display().to_string())?;
        output.print(&text)?;
    }
    for view in &bp.views {
        output.print("")?;
        let path = layout.view_file(name, view.view);
        output.info(&relative(&path, root).display().to_string())?;
        output.print(&view.content)?;
    }

    for warning in &prepared.warnings {
        output.warning(warning)?;
    }
    Ok(())
}
