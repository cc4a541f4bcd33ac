//! Generate Service - main application orchestrator.
//!
//! Runs the fixed stage sequence for one entity:
//! 1. Scaffold blank entity and schema
//! 2. Augment entity, patch schema columns
//! 3. Create controller
//! 4. Scaffold and patch validation schema
//! 5. Register route
//! 6. Create views
//!
//! Input is parsed up front. Stage failures stop the run without rolling
//! back earlier stages; the report says where it stopped.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{error, info, info_span, instrument, warn};

use crate::{
    application::{
        ports::{BlankArtifact, Filesystem, Scaffolder},
        services::{
            artifact_writer::ArtifactWriter,
            report::{CrudRequest, GenerationOutcome, GenerationReport, Stage},
        },
    },
    domain::{
        ArtifactKind, ArtifactPlan, Blueprint, DomainValidator, ENTITY_MARKER, EntityName,
        FieldSpec, ProjectLayout, RULES_MARKER, RelationSpec, SCHEMA_MARKER, parse_fields,
        parse_relations,
    },
    error::{CrudgenError, CrudgenResult},
};

/// Parsed input and rendered text for one run. Touches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedRun {
    pub entity: EntityName,
    pub fields: Vec<FieldSpec>,
    pub relations: Vec<RelationSpec>,
    pub blueprint: Blueprint,
    pub warnings: Vec<String>,
}

/// Derive names, parse specs and render every artifact text.
pub fn prepare(request: &CrudRequest) -> CrudgenResult<PreparedRun> {
    let entity = EntityName::parse(&request.entity)?;
    let fields = parse_fields(&request.fields)?;
    let relations = parse_relations(&request.relations)?;

    let mut warnings = Vec::new();
    for name in DomainValidator::duplicate_field_names(&fields) {
        warn!(field = %name, "Duplicate field name");
        warnings.push(format!("field `{name}` is declared more than once"));
    }
    for relation in relations.iter().filter(|r| !r.kind.is_supported()) {
        warnings.push(format!(
            "relation `{}` has unsupported kind `{}`; no accessor rendered",
            relation.name,
            relation.kind.as_str()
        ));
    }

    let blueprint = Blueprint::render(&entity, &fields, &relations, request.enum_matching);

    Ok(PreparedRun {
        entity,
        fields,
        relations,
        blueprint,
        warnings,
    })
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    scaffolder: Box<dyn Scaffolder>,
    layout: ProjectLayout,
}

impl GenerateService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        scaffolder: Box<dyn Scaffolder>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            scaffolder,
            layout,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run every stage for `request`. Never fails; the outcome is in the report.
    #[instrument(skip_all, fields(entity = %request.entity))]
    pub fn generate(&self, request: &CrudRequest) -> GenerationReport {
        let prepared = match prepare(request) {
            Ok(prepared) => prepared,
            Err(error) => {
                error!(%error, "Input rejected, nothing generated");
                return GenerationReport::fatal(request.entity.trim(), error);
            }
        };

        info!(
            entity = %prepared.entity,
            fields = prepared.fields.len(),
            relations = prepared.relations.len(),
            "Generating CRUD"
        );

        let mut report = GenerationReport::started(
            prepared.entity.studly(),
            prepared.warnings.clone(),
        );

        if let Err((stage, error)) = self.run_stages(&prepared, &mut report) {
            error!(%stage, %error, "Generation stopped");
            report.outcome = GenerationOutcome::PartialFailure { stage, error };
        } else {
            info!(artifacts = report.artifacts.len(), "Generation completed");
        }

        report
    }

    fn run_stages(
        &self,
        run: &PreparedRun,
        report: &mut GenerationReport,
    ) -> Result<(), (Stage, CrudgenError)> {
        let name = &run.entity;
        let bp = &run.blueprint;
        let writer = ArtifactWriter::new(self.filesystem.as_ref());

        let (entity_path, schema_path) =
            self.stage(report, Stage::ScaffoldEntityAndSchema, |_| {
                let entity = self.scaffolder.create_blank(BlankArtifact::Entity, name)?;
                let schema = self.scaffolder.create_blank(BlankArtifact::Schema, name)?;
                Ok((entity, schema))
            })?;

        self.stage(report, Stage::AugmentEntityAndSchema, |report| {
            report.record(writer.apply(&ArtifactPlan::insert_after(
                ArtifactKind::Entity,
                &entity_path,
                ENTITY_MARKER,
                bp.entity.insertion(),
            ))?);
            report.record(writer.apply(&ArtifactPlan::insert_after(
                ArtifactKind::Schema,
                &schema_path,
                SCHEMA_MARKER,
                bp.schema_columns.as_str(),
            ))?);
            Ok(())
        })?;

        self.stage(report, Stage::Controller, |report| {
            report.record(writer.apply(&ArtifactPlan::create(
                ArtifactKind::Controller,
                self.layout.controller_file(name),
                bp.controller.as_str(),
            ))?);
            Ok(())
        })?;

        self.stage(report, Stage::ValidationSchema, |report| {
            let path: PathBuf = self
                .scaffolder
                .create_blank(BlankArtifact::ValidationSchema, name)?;
            report.record(writer.apply(&ArtifactPlan::insert_after(
                ArtifactKind::ValidationSchema,
                path,
                RULES_MARKER,
                bp.validation_rules.as_str(),
            ))?);
            Ok(())
        })?;

        self.stage(report, Stage::Route, |report| {
            let applied = writer.apply(&ArtifactPlan::append_unique(
                ArtifactKind::Route,
                self.layout.routes_file(),
                bp.route.line.as_str(),
                bp.route.needle.as_str(),
            ))?;
            if applied.outcome == crate::application::ArtifactOutcome::AlreadyRegistered {
                report.warnings.push(format!(
                    "route for `{}` already registered in {}",
                    name.plural_lower(),
                    applied.path.display()
                ));
            }
            report.record(applied);
            Ok(())
        })?;

        self.stage(report, Stage::Views, |report| {
            for stub in &bp.views {
                report.record(writer.apply(&ArtifactPlan::create(
                    ArtifactKind::View,
                    self.layout.view_file(name, stub.view),
                    stub.content.as_str(),
                ))?);
            }
            Ok(())
        })?;

        Ok(())
    }

    fn stage<T>(
        &self,
        report: &mut GenerationReport,
        stage: Stage,
        body: impl FnOnce(&mut GenerationReport) -> CrudgenResult<T>,
    ) -> Result<T, (Stage, CrudgenError)> {
        let span = info_span!("stage", %stage);
        let _guard = span.enter();

        match body(report) {
            Ok(value) => {
                info!("Stage completed");
                report.completed_stages.push(stage);
                Ok(value)
            }
            Err(error) => Err((stage, error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        path::Path,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::{
        application::{
            ApplicationError, ArtifactOutcome,
            ports::{MockFilesystem, MockScaffolder},
        },
        domain::{DomainError, LayoutPaths},
    };

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/app", LayoutPaths::default()).unwrap()
    }

    /// A mock filesystem backed by a shared map, so tests can seed and inspect files.
    fn map_filesystem(files: Arc<Mutex<HashMap<PathBuf, String>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        let f = files.clone();
        fs.expect_read_to_string().returning(move |p| {
            f.lock()
                .unwrap()
                .get(p)
                .cloned()
                .ok_or_else(|| ApplicationError::filesystem(p, "not found").into())
        });
        let f = files.clone();
        fs.expect_write_file().returning(move |p, c| {
            f.lock().unwrap().insert(p.to_path_buf(), c.to_string());
            Ok(())
        });
        let f = files.clone();
        fs.expect_append().returning(move |p, c| {
            f.lock()
                .unwrap()
                .entry(p.to_path_buf())
                .or_default()
                .push_str(c);
            Ok(())
        });
        let f = files;
        fs.expect_exists()
            .returning(move |p| f.lock().unwrap().contains_key(p));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_list_dir().returning(|_| Ok(Vec::new()));
        fs
    }

    fn seeded_files() -> Arc<Mutex<HashMap<PathBuf, String>>> {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/app/app/Models/Project.php"),
            "class Project extends Model\n{\n    use HasFactory;\n}\n".to_string(),
        );
        files.insert(
            PathBuf::from("/app/database/migrations/m.php"),
            "Schema::create('projects', function (Blueprint $table) {\n            $table->id();\n        });".to_string(),
        );
        files.insert(
            PathBuf::from("/app/app/Http/Requests/ProjectRequest.php"),
            "    public function rules(): array\n    {\n        return [\n        ];\n    }".to_string(),
        );
        Arc::new(Mutex::new(files))
    }

    fn scaffolder() -> MockScaffolder {
        let mut s = MockScaffolder::new();
        s.expect_create_blank().returning(|kind, _| {
            Ok(match kind {
                BlankArtifact::Entity => "/app/app/Models/Project.php".into(),
                BlankArtifact::Schema => "/app/database/migrations/m.php".into(),
                BlankArtifact::ValidationSchema => {
                    "/app/app/Http/Requests/ProjectRequest.php".into()
                }
            })
        });
        s
    }

    fn request() -> CrudRequest {
        CrudRequest::new("project").fields("name:string, status:enum(open,closed)")
    }

    #[test]
    fn successful_run_completes_all_stages() {
        let files = seeded_files();
        let service = GenerateService::new(
            Box::new(map_filesystem(files.clone())),
            Box::new(scaffolder()),
            layout(),
        );

        let report = service.generate(&request());

        assert!(report.is_success(), "{:?}", report.outcome);
        assert_eq!(report.completed_stages, Stage::ALL.to_vec());
        // entity, schema, controller, request, route, 4 views
        assert_eq!(report.artifacts.len(), 9);

        let files = files.lock().unwrap();
        let model = &files[Path::new("/app/app/Models/Project.php")];
        assert!(model.contains("use HasFactory;\n\n    protected $fillable = ['name', 'status'];"));
        let routes = &files[Path::new("/app/routes/api.php")];
        assert!(routes.contains("Route::apiResource('projects',"));
        assert!(files.contains_key(Path::new(
            "/app/resources/views/projects/show.blade.php"
        )));
    }

    #[test]
    fn malformed_fields_are_fatal_and_touch_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_append().never();
        let mut s = MockScaffolder::new();
        s.expect_create_blank().never();

        let service = GenerateService::new(Box::new(fs), Box::new(s), layout());
        let report = service.generate(&CrudRequest::new("project").fields("name"));

        assert!(matches!(
            report.outcome,
            GenerationOutcome::Fatal {
                error: CrudgenError::Domain(DomainError::MalformedFieldSpec { .. })
            }
        ));
        assert!(report.completed_stages.is_empty());
    }

    #[test]
    fn invalid_entity_name_is_fatal() {
        let service = GenerateService::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockScaffolder::new()),
            layout(),
        );
        let report = service.generate(&CrudRequest::new("   "));

        assert!(matches!(
            report.error(),
            Some(CrudgenError::Domain(DomainError::InvalidEntityName { .. }))
        ));
    }

    #[test]
    fn scaffold_failure_stops_at_first_stage() {
        let mut s = MockScaffolder::new();
        s.expect_create_blank().times(1).returning(|kind, _| {
            Err(ApplicationError::ScaffoldFailed {
                artifact: kind.to_string(),
                reason: "artisan not found".into(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(fs), Box::new(s), layout());
        let report = service.generate(&request());

        assert_eq!(report.failed_stage(), Some(Stage::ScaffoldEntityAndSchema));
        assert!(report.completed_stages.is_empty());
        assert!(!report.is_success());
    }

    #[test]
    fn controller_write_failure_keeps_earlier_artifacts() {
        let files = seeded_files();
        let mut fs = MockFilesystem::new();
        let f = files.clone();
        fs.expect_read_to_string()
            .returning(move |p| Ok(f.lock().unwrap()[p].clone()));
        let f = files.clone();
        fs.expect_write_file().returning(move |p, c| {
            if p.ends_with("ProjectController.php") {
                return Err(ApplicationError::filesystem(p, "permission denied").into());
            }
            f.lock().unwrap().insert(p.to_path_buf(), c.to_string());
            Ok(())
        });
        fs.expect_create_dir_all().returning(|_| Ok(()));

        let service = GenerateService::new(Box::new(fs), Box::new(scaffolder()), layout());
        let report = service.generate(&request());

        assert_eq!(report.failed_stage(), Some(Stage::Controller));
        assert_eq!(
            report.completed_stages,
            vec![Stage::ScaffoldEntityAndSchema, Stage::AugmentEntityAndSchema]
        );
        assert!(
            files.lock().unwrap()[Path::new("/app/app/Models/Project.php")]
                .contains("$fillable")
        );
    }

    #[test]
    fn missing_markers_are_reported_not_raised() {
        let files = seeded_files();
        files.lock().unwrap().insert(
            PathBuf::from("/app/app/Models/Project.php"),
            "class Project {}".to_string(),
        );
        let service = GenerateService::new(
            Box::new(map_filesystem(files)),
            Box::new(scaffolder()),
            layout(),
        );

        let report = service.generate(&request());

        assert!(report.is_success());
        assert_eq!(
            report.artifacts[0].outcome,
            ArtifactOutcome::MarkerNotFound {
                marker: ENTITY_MARKER.into()
            }
        );
        assert!(report.warnings.iter().any(|w| w.contains(ENTITY_MARKER)));
    }

    #[test]
    fn rerun_does_not_duplicate_route() {
        let files = seeded_files();
        let service = GenerateService::new(
            Box::new(map_filesystem(files.clone())),
            Box::new(scaffolder()),
            layout(),
        );

        service.generate(&request());
        let second = service.generate(&request());

        let routes = files.lock().unwrap()[Path::new("/app/routes/api.php")].clone();
        assert_eq!(routes.matches("Route::apiResource('projects',").count(), 1);
        assert!(second.artifacts.iter().any(|a| a.outcome == ArtifactOutcome::AlreadyRegistered));
    }

    #[test]
    fn prepare_collects_warnings() {
        let run = prepare(
            &CrudRequest::new("project")
                .fields("name:string, name:text")
                .relations("owner:belongsToMany"),
        )
        .unwrap();

        assert_eq!(run.warnings.len(), 2);
        assert_eq!(run.entity.studly(), "Project");
    }
}
