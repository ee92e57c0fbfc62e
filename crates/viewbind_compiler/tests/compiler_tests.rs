//! End-to-end tests: description text in, Java text out.

use std::path::PathBuf;
use viewbind_compiler::{write_output_files, CompileError, Compiler, LoadResult};
use viewbind_options::GenerationOptions;

/// Helper: load a single description file.
fn load(json: &str) -> LoadResult {
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source("bindings.json", json);
    compiler.load().unwrap()
}

fn codes(result: &LoadResult) -> Vec<u32> {
    result.diagnostics.diagnostics().iter().map(|d| d.code).collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_clean_description_has_no_diagnostics() {
    let result = load(
        r#"[{
            "target": "com.example.Main",
            "kind": "screen",
            "fields": [{ "id": { "value": 100, "ref": "com.example.R.id.title" }, "name": "title", "type": "android.widget.TextView" }],
            "listeners": [{ "ids": [200], "listener": "OnClick", "method": "onSubmit" }],
            "collections": [{ "ids": [1, 2], "name": "rows", "type": "android.view.View", "kind": "list" }],
            "resources": [{ "id": 300, "name": "accent", "kind": "Color" }]
        }]"#,
    );
    assert!(result.diagnostics.is_empty());
    let model = &result.models[0];
    assert_eq!(model.binding_class().canonical_name(), "com.example.Main_Binder");
    assert_eq!(model.groups().len(), 2);
    assert_eq!(model.collections().len(), 1);
    assert_eq!(model.resources().len(), 1);
}

#[test]
fn test_unknown_names_are_reported() {
    let result = load(
        r#"[{
            "target": "com.example.Main",
            "kind": "fragment",
            "listeners": [
                { "ids": [1], "listener": "OnWiggle", "method": "a" },
                { "ids": [1], "listener": "OnClick", "callback": "onPress", "method": "b" }
            ],
            "resources": [{ "id": 3, "name": "sound", "kind": "Audio" }]
        }]"#,
    );
    assert_eq!(codes(&result), [1005, 1001, 1002, 1003]);
    // The target is still generated, as a plain target with no bindings.
    assert_eq!(result.models.len(), 1);
    assert!(result.models[0].groups().is_empty());
    assert!(result.models[0].resources().is_empty());
}

#[test]
fn test_parameter_position_out_of_range() {
    let result = load(
        r#"[{
            "target": "com.example.Main",
            "listeners": [{ "ids": [1], "listener": "OnClick", "method": "onTap",
                            "parameters": [{ "position": 1, "type": "android.view.View" }] }]
        }]"#,
    );
    assert_eq!(codes(&result), [1006]);
    assert!(result.diagnostics.diagnostics()[0].message_text.contains("'doClick'"));
}

#[test]
fn test_empty_collection_is_rejected() {
    let result = load(
        r#"[{ "target": "com.example.Main",
              "collections": [{ "ids": [], "name": "rows", "type": "android.view.View", "kind": "array" }] }]"#,
    );
    assert_eq!(codes(&result), [1007]);
    assert!(result.models[0].collections().is_empty());
}

#[test]
fn test_duplicate_field_reports_existing_name() {
    let result = load(
        r#"[{
            "target": "com.example.Main",
            "fields": [
                { "id": 7, "name": "first", "type": "android.view.View" },
                { "id": { "value": 7, "ref": "com.example.R.id.same" }, "name": "second", "type": "android.view.View" }
            ]
        }]"#,
    );
    assert_eq!(codes(&result), [2002]);
    let text = &result.diagnostics.diagnostics()[0].message_text;
    assert_eq!(
        text,
        "Attempt to bind field 'second' to ID com.example.R.id.same which is already bound to field 'first'."
    );
    assert_eq!(result.models[0].groups()[0].field().unwrap().name, "first");
}

#[test]
fn test_second_returning_method_is_rejected() {
    let result = load(
        r#"[{
            "target": "com.example.Main",
            "listeners": [
                { "ids": [9], "listener": "OnLongClick", "method": "first", "returnsValue": true },
                { "ids": [9], "listener": "OnLongClick", "method": "second", "returnsValue": true }
            ]
        }]"#,
    );
    assert_eq!(codes(&result), [2001]);
    assert_eq!(
        result.diagnostics.diagnostics()[0].message_text,
        "Multiple listener methods with return value specified for ID 9. (com.example.Main.second)"
    );
}

#[test]
fn test_discarded_return_value_is_a_warning() {
    let result = load(
        r#"[{ "target": "com.example.Main",
              "listeners": [{ "ids": [9], "listener": "OnClick", "method": "onTap", "returnsValue": true }] }]"#,
    );
    assert_eq!(codes(&result), [2003]);
    assert!(!result.diagnostics.has_errors());
    let binding = &result.models[0].groups()[0].bindings_for(viewbind_model::Listener::OnClick, "doClick")[0];
    assert!(!binding.has_return_value);
}

#[test]
fn test_duplicate_target_keeps_first() {
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source("a.json", r#"[{ "target": "com.example.Main", "kind": "widget" }]"#);
    compiler.add_source("b.json", r#"[{ "target": "com.example.Main", "kind": "dialog" }]"#);
    let result = compiler.load().unwrap();
    assert_eq!(codes(&result), [1008]);
    assert_eq!(result.diagnostics.diagnostics()[0].file.as_deref(), Some("b.json"));
    assert_eq!(result.models.len(), 1);
    assert_eq!(result.models[0].kind(), viewbind_model::TargetKind::Widget);
}

#[test]
fn test_blank_target_name_is_skipped() {
    let result = load(r#"[{ "target": "" }, { "target": " ... " }, { "target": "com.example.Main" }]"#);
    assert_eq!(codes(&result), [1009, 1009]);
    assert_eq!(result.models.len(), 1);
    assert_eq!(result.models[0].target().canonical_name(), "com.example.Main");
}

#[test]
fn test_blank_type_names_skip_the_binding() {
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source(
        "bindings.json",
        r#"[{
            "target": "com.example.Main",
            "parent": { "binder": "." },
            "fields": [
                { "id": 1, "name": "title", "type": "" },
                { "id": 2, "name": "body", "type": "android.widget.TextView" }
            ],
            "listeners": [{ "ids": [3], "listener": "OnClick", "method": "onTap", "parameters": [{ "position": 0, "type": "[]" }] }],
            "collections": [{ "ids": [4, 5], "name": "rows", "type": "<?>", "kind": "array" }]
        }]"#,
    );
    let result = compiler.load().unwrap();
    assert_eq!(codes(&result), [1009, 1009, 1009, 1009]);
    assert!(result.diagnostics.diagnostics()[0].message_text.contains("is not a valid class or type name"));

    let model = &result.models[0];
    assert!(model.parent().is_none());
    assert_eq!(model.groups().len(), 1);
    assert!(model.collections().is_empty());

    let files = compiler.generate(&result.models);
    assert!(files[0].text.contains("target.body = "));
    assert!(!files[0].text.contains("title"));
}

#[test]
fn test_invalid_json_is_fatal() {
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source("broken.json", "[{ \"target\": ");
    match compiler.load() {
        Err(CompileError::Json { file, .. }) => assert_eq!(file, "broken.json"),
        other => panic!("expected a JSON error, got {:?}", other.map(|r| r.models.len())),
    }
}

// ============================================================================
// Inheritance
// ============================================================================

#[test]
fn test_parent_described_later_is_built_first() {
    let result = load(
        r#"[
            { "target": "com.example.Child", "parent": { "target": "com.example.Base" } },
            { "target": "com.example.Base", "fields": [{ "id": 1, "name": "title", "type": "android.view.View" }] }
        ]"#,
    );
    assert!(result.diagnostics.is_empty());
    // Input order is preserved.
    assert_eq!(result.models[0].target().simple_name(), "Child");
    let parent = result.models[0].parent().unwrap();
    assert_eq!(parent.binding_class.canonical_name(), "com.example.Base_Binder");
    assert!(parent.needs_view);
    assert!(result.models[0].constructor_needs_view());
}

#[test]
fn test_external_parent_binder() {
    let result = load(
        r#"[{ "target": "com.example.Child",
              "parent": { "binder": "com.lib.Base_Binder", "needsView": false } }]"#,
    );
    let parent = result.models[0].parent().unwrap();
    assert_eq!(parent.binding_class.canonical_name(), "com.lib.Base_Binder");
    assert!(!result.models[0].constructor_needs_view());
}

#[test]
fn test_missing_parent_is_reported() {
    let result = load(r#"[{ "target": "com.example.Child", "parent": { "target": "com.example.Gone" } }]"#);
    assert_eq!(codes(&result), [2101]);
    assert!(result.models[0].parent().is_none());
}

#[test]
fn test_inheritance_cycle_is_reported() {
    let result = load(
        r#"[
            { "target": "com.example.A", "parent": { "target": "com.example.B" } },
            { "target": "com.example.B", "parent": { "target": "com.example.A" } }
        ]"#,
    );
    assert_eq!(codes(&result), [2102]);
    assert_eq!(result.models.len(), 2);
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_generate_keeps_input_order_and_paths() {
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source(
        "bindings.json",
        r#"[
            { "target": "com.example.Zeta", "fields": [{ "id": 1, "name": "a", "type": "android.view.View" }] },
            { "target": "com.example.Alpha.Inner", "fields": [{ "id": 2, "name": "b", "type": "android.view.View" }] },
            { "target": "org.other.Mid" }
        ]"#,
    );
    let result = compiler.load().unwrap();
    let files = compiler.generate(&result.models);
    let names: Vec<&str> = files.iter().map(|f| f.class_name.as_str()).collect();
    assert_eq!(
        names,
        ["com.example.Zeta_Binder", "com.example.Alpha$Inner_Binder", "org.other.Mid_Binder"]
    );
    assert_eq!(
        files[1].path,
        PathBuf::from("gen").join("com").join("example").join("Alpha$Inner_Binder.java")
    );
    assert!(files[0].text.starts_with("// Generated code from viewbind. Do not modify!\npackage com.example;\n"));
    assert!(files[0].text.contains("public class Zeta_Binder implements Unbinder {"));
}

#[test]
fn test_generation_is_deterministic() {
    let json = r#"[
        { "target": "com.example.Main",
          "fields": [{ "id": 1, "name": "title", "type": "android.widget.TextView" }],
          "listeners": [{ "ids": [1, 2], "listener": "OnClick", "method": "onTap" }] }
    ]"#;
    let mut compiler = Compiler::new(GenerationOptions::default(), "gen");
    compiler.add_source("bindings.json", json);
    let models = compiler.load().unwrap().models;
    assert_eq!(compiler.generate(&models), compiler.generate(&models));
}

#[test]
fn test_release_drops_debug_casts() {
    let json = r#"[{ "target": "com.example.Main",
                     "fields": [{ "id": 1, "name": "title", "type": "android.widget.TextView" }] }]"#;
    let generate = |debuggable: bool| {
        let mut compiler = Compiler::new(GenerationOptions { sdk: 1, debuggable }, "gen");
        compiler.add_source("bindings.json", json);
        let models = compiler.load().unwrap().models;
        compiler.generate(&models).remove(0).text
    };
    assert!(generate(true).contains("Utils.findRequiredViewAsType(source, 1, \"field 'title'\", TextView.class)"));
    assert!(generate(false).contains("target.title = (TextView) source.findViewById(1);"));
}

// ============================================================================
// Writing
// ============================================================================

#[test]
fn test_write_output_files_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mut compiler = Compiler::new(GenerationOptions::default(), dir.path());
    compiler.add_source("bindings.json", r#"[{ "target": "com.example.Main" }]"#);
    let models = compiler.load().unwrap().models;
    let files = compiler.generate(&models);
    write_output_files(&files).unwrap();

    let written = dir.path().join("com/example/Main_Binder.java");
    assert_eq!(std::fs::read_to_string(written).unwrap(), files[0].text);
}

#[test]
fn test_load_files_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut compiler = Compiler::new(GenerationOptions::default(), dir.path());
    let missing = dir.path().join("missing.json");
    match compiler.load_files(&[missing.clone()]) {
        Err(CompileError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected a read error, got {:?}", other),
    }
}
