//! Resource controller source.
//!
//! The template is fixed and parameterised only by the entity's names; all
//! field-specific validation lives in the form request.

use crate::domain::naming::EntityName;

pub const CONTROLLER_NAMESPACE: &str = "App\\Http\\Controllers\\Api";

/// Full controller file: index, store, show, update, destroy.
pub fn render(name: &EntityName) -> String {
    let model = name.studly();
    let var = name.camel();
    let controller = name.controller();
    let request = name.request();

    format!(
        r#"<?php

namespace {CONTROLLER_NAMESPACE};

use App\Http\Controllers\Controller;
use App\Models\{model};
use App\Http\Requests\{request};
use Illuminate\Http\Request;

class {controller} extends Controller
{{
    public function index()
    {{
        return {model}::all();
    }}

    public function store({request} $request)
    {{
        ${var} = {model}::create($request->validated());
        return response()->json(${var}, 201);
    }}

    public function show({model} ${var})
    {{
        return response()->json(${var});
    }}

    public function update({request} $request, {model} ${var})
    {{
        ${var}->update($request->validated());
        return response()->json(${var});
    }}

    public function destroy({model} ${var})
    {{
        ${var}->delete();
        return response()->json(null, 204);
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> String {
        render(&EntityName::parse("project").unwrap())
    }

    #[test]
    fn declares_controller_class_and_imports() {
        let src = project();
        assert!(src.starts_with("<?php\n"));
        assert!(src.contains("namespace App\\Http\\Controllers\\Api;"));
        assert!(src.contains("use App\\Models\\Project;"));
        assert!(src.contains("use App\\Http\\Requests\\ProjectRequest;"));
        assert!(src.contains("class ProjectController extends Controller"));
    }

    #[test]
    fn exposes_five_resource_operations() {
        let src = project();
        for op in ["index()", "store(", "show(", "update(", "destroy("] {
            assert!(src.contains(&format!("public function {op}")), "missing {op}");
        }
    }

    #[test]
    fn uses_validated_input_and_camel_variable() {
        let src = render(&EntityName::parse("blog_post").unwrap());
        assert!(src.contains("$blogPost = BlogPost::create($request->validated());"));
        assert!(src.contains("public function update(BlogPostRequest $request, BlogPost $blogPost)"));
        assert!(src.contains("return response()->json(null, 204);"));
    }

    #[test]
    fn braces_are_balanced() {
        let src = project();
        assert_eq!(src.matches('{').count(), src.matches('}').count());
    }
}
