mod common;

use std::cell::RefCell;

use tempfile::TempDir;
use yginit::error::{Error, Result};
use yginit::renderer::{
    discover_sources, render_targets, MiniJinjaRenderer, RenderInputs, TargetFile, TemplateRenderer,
};
use yginit::request::ScaffoldRequest;
use yginit::vcs::CommitIdentity;

#[test]
fn test_minijinja_renderer() {
    let temp_dir = TempDir::new().unwrap();
    common::write(temp_dir.path().join("hello.txt"), "Hello {{ name }}!");
    common::write(
        temp_dir.path().join("nested/inc.txt"),
        "{% include 'hello.txt' %} Value: {{ value }}",
    );

    let renderer = MiniJinjaRenderer::new(temp_dir.path());
    let context = serde_json::json!({ "name": "test", "value": 42 });

    assert_eq!(renderer.render("hello.txt", &context).unwrap(), "Hello test!");
    assert_eq!(renderer.render("nested/inc.txt", &context).unwrap(), "Hello test! Value: 42");
}

#[test]
fn test_missing_placeholder_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    common::write(temp_dir.path().join("README.md"), "# {{ YOURGAME_PROJECT_NAME }} {{ UNKNOWN }}");

    let renderer = MiniJinjaRenderer::new(temp_dir.path());
    let context = serde_json::json!({ "YOURGAME_PROJECT_NAME": "Foo" });
    match renderer.render("README.md", &context) {
        Err(Error::TemplateRender { template, .. }) => assert_eq!(template, "README.md"),
        other => panic!("Expected TemplateRender, got {other:?}"),
    }
}

#[test]
fn test_missing_template_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new(temp_dir.path());
    assert!(matches!(
        renderer.render("CMakeLists.txt", &serde_json::json!({})),
        Err(Error::TemplateRender { .. })
    ));
}

#[test]
fn test_xml_is_not_escaped() {
    let temp_dir = TempDir::new().unwrap();
    common::write(temp_dir.path().join("AndroidManifest.xml"), common::MANIFEST_TEMPLATE);

    let renderer = MiniJinjaRenderer::new(temp_dir.path());
    let out = renderer
        .render("AndroidManifest.xml", &serde_json::json!({ "YOURGAME_PROJECT_NAME": "Tom&Jerry" }))
        .unwrap();
    assert!(out.contains("android:label=\"Tom&Jerry\""));
}

#[test]
fn test_discover_sources() {
    let temp_dir = TempDir::new().unwrap();
    assert!(discover_sources(temp_dir.path(), &[".cpp"]).unwrap().is_empty());

    for name in ["zeta.cpp", "alpha.cpp", "mygame.h", "notes.cpp.txt"] {
        common::write(temp_dir.path().join("src").join(name), "");
    }
    std::fs::create_dir_all(temp_dir.path().join("src/dir.cpp")).unwrap();
    common::write(temp_dir.path().join("src/sub/deep.cpp"), "");

    assert_eq!(discover_sources(temp_dir.path(), &[".cpp"]).unwrap(), ["alpha.cpp", "zeta.cpp"]);
    assert_eq!(
        discover_sources(temp_dir.path(), &[".cpp", ".h"]).unwrap(),
        ["alpha.cpp", "mygame.h", "zeta.cpp"]
    );
}

#[cfg(unix)]
#[test]
fn test_discover_sources_follows_symlinks() {
    let temp_dir = TempDir::new().unwrap();
    let shared = temp_dir.path().join("shared/engine.cpp");
    common::write(&shared, "");
    common::write(temp_dir.path().join("src/main.cpp"), "");
    let src = temp_dir.path().join("src");
    std::os::unix::fs::symlink(&shared, src.join("engine.cpp")).unwrap();
    std::os::unix::fs::symlink(temp_dir.path().join("gone.cpp"), src.join("broken.cpp")).unwrap();

    assert_eq!(discover_sources(temp_dir.path(), &[".cpp"]).unwrap(), ["engine.cpp", "main.cpp"]);
}

#[test]
fn test_target_contexts() {
    let request = ScaffoldRequest::new("MyGame")
        .unwrap()
        .with_clone(true)
        .with_ext_proj(["bullet"]);
    let commit = CommitIdentity::new("abc123");
    let sources = vec!["mygame.cpp".to_string()];
    let inputs = RenderInputs {
        request: &request,
        commit: &commit,
        relative_root: "../lib",
        sources: &sources,
    };

    let cmake = TargetFile::BuildDescriptor.context(&inputs);
    assert_eq!(cmake.get("YOURGAME_CLONE").unwrap(), "ON");
    assert_eq!(cmake.get("YOURGAME_BARE").unwrap(), false);
    assert_eq!(cmake.get("YOURGAME_ROOT").unwrap(), "../lib");
    assert_eq!(cmake.get("YOURGAME_MY_SOURCES").unwrap(), &serde_json::json!(["mygame.cpp"]));
    assert_eq!(cmake.get("YOURGAME_EXT_PROJ").unwrap(), &serde_json::json!(["bullet"]));

    let gradle = TargetFile::AndroidGradle.context(&inputs);
    assert_eq!(gradle.placeholders().collect::<Vec<_>>(), ["YOURGAME_PROJECT_NAME_LOWER"]);
    assert_eq!(gradle.get("YOURGAME_PROJECT_NAME_LOWER").unwrap(), "mygame");

    let readme = TargetFile::Readme.context(&inputs);
    assert_eq!(readme.get("YOURGAME_GIT_COMMIT_INIT").unwrap(), "abc123");
}

/// Records render calls and fails on one template.
struct FailingRenderer {
    fail_on: &'static str,
    calls: RefCell<Vec<String>>,
}

impl TemplateRenderer for FailingRenderer {
    fn render(&self, name: &str, _context: &serde_json::Value) -> Result<String> {
        self.calls.borrow_mut().push(name.to_string());
        if name == self.fail_on {
            return Err(Error::ArgumentError(format!("cannot render {name}")));
        }
        Ok(format!("rendered {name}"))
    }
}

#[test]
fn test_render_failure_keeps_earlier_files_and_the_failing_one() {
    let temp_dir = TempDir::new().unwrap();
    for target in TargetFile::ALL {
        common::write(temp_dir.path().join(target.relative_path()), "template");
    }
    let renderer = FailingRenderer {
        fail_on: "build/android/app/src/main/AndroidManifest.xml",
        calls: RefCell::new(Vec::new()),
    };
    let request = ScaffoldRequest::new("Foo").unwrap();
    let commit = CommitIdentity::new("abc123");
    let inputs = RenderInputs {
        request: &request,
        commit: &commit,
        relative_root: "..",
        sources: &[],
    };

    assert!(render_targets(&renderer, temp_dir.path(), &inputs).is_err());
    assert_eq!(renderer.calls.borrow().len(), 3);
    assert_eq!(common::read(temp_dir.path().join("CMakeLists.txt")), "rendered CMakeLists.txt");
    assert_eq!(
        common::read(temp_dir.path().join("build/android/app/src/main/AndroidManifest.xml")),
        "template"
    );
    assert_eq!(common::read(temp_dir.path().join("README.md")), "template");
}
