//! The validated input of a scaffold run.

use crate::cli::{parse_project_name, InitArgs};
use crate::error::{Error, Result};

/// Which part of the template ends up in the new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldMode {
    /// Everything, including the source stub and all assets.
    Full,
    /// No source stub, only stock assets.
    NoTemplate,
    /// No source stub, only license assets.
    Bare,
}

/// Everything the initializer needs to know about the project to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: String,
    clone: bool,
    bare: bool,
    no_template: bool,
    ext_proj: Vec<String>,
}

impl ScaffoldRequest {
    /// Creates a request for a full scaffold of `name`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = parse_project_name(&name.into()).map_err(Error::ArgumentError)?;
        Ok(Self {
            name,
            clone: false,
            bare: false,
            no_template: false,
            ext_proj: Vec::new(),
        })
    }

    pub fn with_clone(mut self, clone: bool) -> Self {
        self.clone = clone;
        self
    }

    pub fn with_bare(mut self, bare: bool) -> Self {
        self.bare = bare;
        self
    }

    pub fn with_no_template(mut self, no_template: bool) -> Self {
        self.no_template = no_template;
        self
    }

    pub fn with_ext_proj<I, S>(mut self, ext_proj: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ext_proj = ext_proj.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_lower(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn clone_library(&self) -> bool {
        self.clone
    }

    pub fn bare(&self) -> bool {
        self.bare
    }

    pub fn no_template(&self) -> bool {
        self.no_template
    }

    pub fn ext_proj(&self) -> &[String] {
        &self.ext_proj
    }

    /// Resolves the mode flags. Bare is the stricter mode and wins over no-template.
    pub fn mode(&self) -> ScaffoldMode {
        match (self.bare, self.no_template) {
            (true, _) => ScaffoldMode::Bare,
            (false, true) => ScaffoldMode::NoTemplate,
            (false, false) => ScaffoldMode::Full,
        }
    }
}

impl TryFrom<&InitArgs> for ScaffoldRequest {
    type Error = Error;

    fn try_from(args: &InitArgs) -> Result<Self> {
        Ok(ScaffoldRequest::new(args.name.clone())?
            .with_clone(args.clone)
            .with_bare(args.bare)
            .with_no_template(args.no_template)
            .with_ext_proj(args.ext_proj.iter().cloned()))
    }
}
