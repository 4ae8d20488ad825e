//! Template renderer and rendering functionality for yginit.
//! Renders the fixed set of project files in place, after the template has
//! been copied, with MiniJinja.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::Value;

use crate::constants::{
    ANDROID_GRADLE, ANDROID_MANIFEST, BUILD_DESCRIPTOR, README, SOURCES_DIR,
};
use crate::error::{Error, Result};
use crate::request::ScaffoldRequest;
use crate::vcs::CommitIdentity;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template called `name` with the given context.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the renderer's root, `/` separated
    /// * `context` - Context variables for rendering
    fn render(&self, name: &str, context: &Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine reading templates from a directory.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer loading templates (and their includes) from `root`.
    ///
    /// Unknown placeholders are errors and nothing is auto-escaped, the
    /// targets are build files rather than HTML.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(root.as_ref().to_path_buf()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateRender` if the template is missing, malformed or
    ///   refers to a placeholder the context does not bind
    fn render(&self, name: &str, context: &Value) -> Result<String> {
        let render_error = |source| Error::TemplateRender {
            template: name.to_string(),
            source,
        };
        let tmpl = self.env.get_template(name).map_err(render_error)?;
        tmpl.render(context).map_err(render_error)
    }
}

/// Placeholder values for one target file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionContext {
    values: IndexMap<&'static str, Value>,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: Into<Value>>(mut self, placeholder: &'static str, value: V) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn get(&self, placeholder: &str) -> Option<&Value> {
        self.values.get(placeholder)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.values.iter().map(|(k, v)| (k.to_string(), v.clone())).collect())
    }
}

/// Everything the substitution contexts are built from.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    pub request: &'a ScaffoldRequest,
    pub commit: &'a CommitIdentity,
    /// Library root relative to the project, `/` separated.
    pub relative_root: &'a str,
    /// Source files found in the project's `src/`.
    pub sources: &'a [String],
}

/// The project files rendered after copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFile {
    BuildDescriptor,
    AndroidGradle,
    AndroidManifest,
    Readme,
}

impl TargetFile {
    /// Render order.
    pub const ALL: [TargetFile; 4] = [
        TargetFile::BuildDescriptor,
        TargetFile::AndroidGradle,
        TargetFile::AndroidManifest,
        TargetFile::Readme,
    ];

    /// Location inside the project, `/` separated.
    pub fn relative_path(self) -> &'static str {
        match self {
            TargetFile::BuildDescriptor => BUILD_DESCRIPTOR,
            TargetFile::AndroidGradle => ANDROID_GRADLE,
            TargetFile::AndroidManifest => ANDROID_MANIFEST,
            TargetFile::Readme => README,
        }
    }

    pub fn context(self, inputs: &RenderInputs<'_>) -> SubstitutionContext {
        let request = inputs.request;
        match self {
            TargetFile::BuildDescriptor => SubstitutionContext::new()
                .with("YOURGAME_GIT_COMMIT_INIT", inputs.commit.as_str())
                .with("YOURGAME_ROOT", inputs.relative_root)
                .with("YOURGAME_CLONE", if request.clone_library() { "ON" } else { "OFF" })
                .with("YOURGAME_PROJECT_NAME", request.name())
                .with("YOURGAME_BARE", request.bare())
                .with("YOURGAME_MY_SOURCES", inputs.sources.to_vec())
                .with("YOURGAME_EXT_PROJ", request.ext_proj().to_vec()),
            TargetFile::AndroidGradle => SubstitutionContext::new()
                .with("YOURGAME_PROJECT_NAME_LOWER", request.name_lower()),
            TargetFile::AndroidManifest => {
                SubstitutionContext::new().with("YOURGAME_PROJECT_NAME", request.name())
            }
            TargetFile::Readme => SubstitutionContext::new()
                .with("YOURGAME_PROJECT_NAME", request.name())
                .with("YOURGAME_GIT_COMMIT_INIT", inputs.commit.as_str()),
        }
    }
}

/// Lists the files directly in `<project_dir>/src` ending in one of `suffixes`,
/// sorted by name. Symlinks are followed, broken ones skipped. A missing `src/`
/// yields an empty list.
pub fn discover_sources<P, S>(project_dir: P, suffixes: &[S]) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let src_dir = project_dir.as_ref().join(SOURCES_DIR);
    if !src_dir.is_dir() {
        debug!("No {} directory, the project has no sources yet.", src_dir.display());
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(&src_dir)? {
        let entry = entry?;
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                debug!("Skipping unreadable source entry '{}': {e}", entry.path().display());
                continue;
            }
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if suffixes.iter().any(|suffix| name.ends_with(suffix.as_ref())) {
            sources.push(name);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Renders every [`TargetFile`] of `project_dir` in place.
///
/// Each file is rendered completely before it is written, so a failing file
/// keeps its previous content. Files rendered before the failure stay written.
pub fn render_targets<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    project_dir: P,
    inputs: &RenderInputs<'_>,
) -> Result<()> {
    let project_dir = project_dir.as_ref();
    for target in TargetFile::ALL {
        let name = target.relative_path();
        let context = target.context(inputs);
        debug!(
            "Rendering '{}' with {}",
            name,
            context.placeholders().collect::<Vec<_>>().join(", ")
        );
        let content = renderer.render(name, &context.to_value())?;
        fs::write(project_dir.join(name), content)?;
        println!("rendered: '{}'", name);
    }
    Ok(())
}
