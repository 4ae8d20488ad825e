//! The project initializer pipeline: resolve paths, read the library commit,
//! copy the template, render the project files.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{get_config, ScaffoldConfig};
use crate::copier::{prepare_target_dir, CopyEntry, Copier};
use crate::error::Result;
use crate::layout::{absolutize, LibraryLayout};
use crate::renderer::{discover_sources, render_targets, MiniJinjaRenderer, RenderInputs};
use crate::request::ScaffoldRequest;
use crate::vcs::{read_commit, CommitIdentity};

/// What a scaffold run did.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub target_dir: PathBuf,
    pub commit: CommitIdentity,
    /// Library root as seen from the project, `/` separated.
    pub relative_root: String,
    pub copied: Vec<CopyEntry>,
    pub sources: Vec<String>,
}

/// Creates projects from one library installation.
pub struct Scaffolder {
    layout: LibraryLayout,
    config: ScaffoldConfig,
}

impl Scaffolder {
    /// Uses the configuration file shipped with the library, if any.
    pub fn new(layout: LibraryLayout) -> Result<Self> {
        let config = get_config(layout.init_dir())?;
        Ok(Self { layout, config })
    }

    pub fn with_config(layout: LibraryLayout, config: ScaffoldConfig) -> Self {
        Self { layout, config }
    }

    pub fn layout(&self) -> &LibraryLayout {
        &self.layout
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Directory the project named in `request` is created in, below `output_dir`.
    pub fn target_dir<P: AsRef<Path>>(
        &self,
        request: &ScaffoldRequest,
        output_dir: P,
    ) -> Result<PathBuf> {
        absolutize(&output_dir.as_ref().join(request.name()))
    }

    /// Runs the whole pipeline, stamping the library's current commit.
    ///
    /// The commit is read before anything is written, so a library without
    /// usable history leaves the filesystem untouched.
    pub fn run<P: AsRef<Path>>(
        &self,
        request: &ScaffoldRequest,
        output_dir: P,
    ) -> Result<ScaffoldReport> {
        let commit = read_commit(self.layout.root())?;
        println!("yourgamelib commit: {commit}");
        self.scaffold(request, output_dir, commit)
    }

    /// Copies and renders the project with an already known commit.
    pub fn scaffold<P: AsRef<Path>>(
        &self,
        request: &ScaffoldRequest,
        output_dir: P,
        commit: CommitIdentity,
    ) -> Result<ScaffoldReport> {
        let target_dir = self.target_dir(request, output_dir)?;
        let relative_root = self.layout.relative_root(&target_dir)?;
        debug!(
            "Scaffolding '{}' into '{}' ({:?}), library at '{}'.",
            request.name(),
            target_dir.display(),
            request.mode(),
            relative_root
        );

        prepare_target_dir(&target_dir)?;

        let copier = Copier::new(self.layout.template_dir(), &target_dir, &self.config)?;
        let copied = copier.run(request.mode())?;

        let sources = discover_sources(&target_dir, self.config.source_suffixes.as_slice())?;
        let renderer = MiniJinjaRenderer::new(&target_dir);
        let inputs = RenderInputs {
            request,
            commit: &commit,
            relative_root: &relative_root,
            sources: &sources,
        };
        render_targets(&renderer, &target_dir, &inputs)?;

        Ok(ScaffoldReport {
            target_dir,
            commit,
            relative_root,
            copied,
            sources,
        })
    }
}
