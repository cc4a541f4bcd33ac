//! Writes framework-shaped blank files directly, without a PHP toolchain.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use crudgen_core::{
    application::ports::{BlankArtifact, Filesystem, Scaffolder},
    domain::{EntityName, ProjectLayout},
    error::CrudgenResult,
};
use tracing::{debug, info};

use super::MIGRATION_TIMESTAMP_FORMAT;

/// Scaffolder that renders blank stubs through the [`Filesystem`] port.
pub struct StubScaffolder {
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
    clock: fn() -> NaiveDateTime,
}

impl StubScaffolder {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: ProjectLayout) -> Self {
        Self {
            filesystem,
            layout,
            clock: || Local::now().naive_local(),
        }
    }

    /// Replace the clock used to timestamp migrations.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn write_new(&self, path: PathBuf, content: String) -> CrudgenResult<PathBuf> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content)?;
        info!(path = %path.display(), "Stub created");
        Ok(path)
    }

    /// Existing files keep their content.
    fn write_once(&self, path: PathBuf, content: String) -> CrudgenResult<PathBuf> {
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Already exists, leaving untouched");
            return Ok(path);
        }
        self.write_new(path, content)
    }
}

impl Scaffolder for StubScaffolder {
    fn create_blank(&self, kind: BlankArtifact, name: &EntityName) -> CrudgenResult<PathBuf> {
        match kind {
            BlankArtifact::Entity => {
                self.write_once(self.layout.entity_file(name), entity_stub(name))
            }
            BlankArtifact::Schema => {
                let timestamp = (self.clock)().format(MIGRATION_TIMESTAMP_FORMAT).to_string();
                self.write_new(
                    self.layout.migration_file(&timestamp, name),
                    migration_stub(name),
                )
            }
            BlankArtifact::ValidationSchema => {
                self.write_once(self.layout.request_file(name), request_stub(name))
            }
        }
    }
}

fn entity_stub(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {studly} extends Model
{{
    use HasFactory;
}}
"#,
        studly = name.studly()
    )
}

fn migration_stub(name: &EntityName) -> String {
    format!(
        r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{{
    /**
     * Run the migrations.
     */
    public function up(): void
    {{
        Schema::create('{table}', function (Blueprint $table) {{
            $table->id();
            $table->timestamps();
        }});
    }}

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {{
        Schema::dropIfExists('{table}');
    }}
}};
"#,
        table = name.table()
    )
}

fn request_stub(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class {request} extends FormRequest
{{
    public function authorize(): bool
    {{
        return true;
    }}

    public function rules(): array
    {{
        return [
        ];
    }}
}}
"#,
        request = name.request()
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use crudgen_core::domain::{ENTITY_MARKER, LayoutPaths, RULES_MARKER, SCHEMA_MARKER};

    use super::*;
    use crate::MemoryFilesystem;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(9, 5, 3))
            .unwrap()
    }

    fn scaffolder(fs: &MemoryFilesystem) -> StubScaffolder {
        let layout = ProjectLayout::new("/app", LayoutPaths::default()).unwrap();
        StubScaffolder::new(Box::new(fs.clone()), layout).with_clock(fixed_clock)
    }

    fn project() -> EntityName {
        EntityName::parse("project").unwrap()
    }

    #[test]
    fn stubs_carry_patch_markers() {
        let fs = MemoryFilesystem::new();
        let s = scaffolder(&fs);

        let entity = s.create_blank(BlankArtifact::Entity, &project()).unwrap();
        let schema = s.create_blank(BlankArtifact::Schema, &project()).unwrap();
        let request = s
            .create_blank(BlankArtifact::ValidationSchema, &project())
            .unwrap();

        assert!(fs.read_file(&entity).unwrap().contains(ENTITY_MARKER));
        assert!(fs.read_file(&schema).unwrap().contains(SCHEMA_MARKER));
        assert!(fs.read_file(&request).unwrap().contains(RULES_MARKER));
    }

    #[test]
    fn migration_name_is_timestamped() {
        let fs = MemoryFilesystem::new();
        let path = scaffolder(&fs)
            .create_blank(BlankArtifact::Schema, &project())
            .unwrap();

        assert_eq!(
            path,
            Path::new("/app/database/migrations/2026_10_19_090503_create_projects_table.php")
        );
        assert!(fs.read_file(&path).unwrap().contains("Schema::create('projects'"));
    }

    #[test]
    fn existing_entity_is_left_untouched() {
        let fs = MemoryFilesystem::new().with_file("/app/app/Models/Project.php", "custom");

        let path = scaffolder(&fs)
            .create_blank(BlankArtifact::Entity, &project())
            .unwrap();

        assert_eq!(fs.read_file(&path).as_deref(), Some("custom"));
    }
}
