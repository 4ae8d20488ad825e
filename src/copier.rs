//! Copying the template into a new project.
//!
//! Which top-level template items are copied is decided by a single policy
//! table, see [`selection`]. Directories are merged into the target, so files
//! the user already has there survive a re-run.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher, GlobSet};
use log::debug;
use walkdir::WalkDir;

use crate::config::ScaffoldConfig;
use crate::constants::{ASSETS_DIR, SOURCES_DIR};
use crate::error::{Error, Result};
use crate::ignore::build_ignore_set;
use crate::layout::to_forward_slashes;
use crate::request::ScaffoldMode;

/// How a top-level template item is treated across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPolicy {
    /// Copied in every mode.
    Always,
    /// The assets directory, filtered by mode.
    Assets,
    /// The source stub, only part of full scaffolds.
    Sources,
}

impl CopyPolicy {
    /// Top-level files ending in a source suffix count as source stubs too.
    pub fn for_item<S: AsRef<str>>(name: &str, is_dir: bool, source_suffixes: &[S]) -> Self {
        match name {
            ASSETS_DIR => CopyPolicy::Assets,
            SOURCES_DIR => CopyPolicy::Sources,
            _ if !is_dir && source_suffixes.iter().any(|s| name.ends_with(s.as_ref())) => {
                CopyPolicy::Sources
            }
            _ => CopyPolicy::Always,
        }
    }
}

/// What part of an item gets copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Everything,
    Nothing,
    /// Only entries whose name starts with the stock prefix.
    StockOnly,
    /// Only entries whose name matches the license pattern.
    LicenseOnly,
}

/// The copy policy table.
pub fn selection(policy: CopyPolicy, mode: ScaffoldMode) -> Selection {
    match (policy, mode) {
        (CopyPolicy::Always, _) => Selection::Everything,
        (CopyPolicy::Assets, ScaffoldMode::Full) => Selection::Everything,
        (CopyPolicy::Assets, ScaffoldMode::NoTemplate) => Selection::StockOnly,
        (CopyPolicy::Assets, ScaffoldMode::Bare) => Selection::LicenseOnly,
        (CopyPolicy::Sources, ScaffoldMode::Full) => Selection::Everything,
        (CopyPolicy::Sources, _) => Selection::Nothing,
    }
}

/// A top-level entry of the template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateItem {
    pub name: String,
    pub source: PathBuf,
    pub is_dir: bool,
    pub policy: CopyPolicy,
}

/// Lists the top-level items of `template_dir`, sorted by name.
pub fn list_template_items<P, S>(
    template_dir: P,
    source_suffixes: &[S],
) -> Result<Vec<TemplateItem>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut items = Vec::new();
    for entry in fs::read_dir(template_dir.as_ref())? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        let policy = CopyPolicy::for_item(&name, is_dir, source_suffixes);
        items.push(TemplateItem {
            source: entry.path(),
            is_dir,
            name,
            policy,
        });
    }
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}

/// One file or directory scheduled for copying, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub relative: PathBuf,
    pub source: PathBuf,
    pub is_dir: bool,
}

impl CopyEntry {
    /// Display form with `/` separators, as printed to the user.
    pub fn display_path(&self) -> String {
        to_forward_slashes(&self.relative)
    }
}

/// Creates `target_dir` if needed. An existing directory is reported, never refused.
pub fn prepare_target_dir<P: AsRef<Path>>(target_dir: P) -> Result<()> {
    let target_dir = target_dir.as_ref();
    if target_dir.is_dir() {
        println!("{} already present", target_dir.display());
    } else if target_dir.exists() {
        return Err(Error::FileSystemError(format!(
            "'{}' exists and is not a directory",
            target_dir.display()
        )));
    } else {
        fs::create_dir_all(target_dir)?;
        println!("{} created", target_dir.display());
    }
    Ok(())
}

/// Copies the policy-filtered template into a project directory.
pub struct Copier<'a> {
    template_dir: &'a Path,
    target_dir: &'a Path,
    stock_prefix: &'a str,
    source_suffixes: &'a [String],
    license: GlobMatcher,
    ignored: GlobSet,
}

impl<'a> Copier<'a> {
    pub fn new(
        template_dir: &'a Path,
        target_dir: &'a Path,
        config: &'a ScaffoldConfig,
    ) -> Result<Self> {
        let license = GlobBuilder::new(&config.license_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                Error::PatternError(format!(
                    "invalid license pattern '{}': {e}",
                    config.license_pattern
                ))
            })?
            .compile_matcher();
        Ok(Self {
            template_dir,
            target_dir,
            stock_prefix: &config.stock_prefix,
            source_suffixes: &config.source_suffixes,
            license,
            ignored: build_ignore_set(config.ignore.as_slice())?,
        })
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignored.is_match(to_forward_slashes(relative))
    }

    fn keeps(&self, selection: Selection, name: &str) -> bool {
        match selection {
            Selection::Everything => true,
            Selection::Nothing => false,
            Selection::StockOnly => name.starts_with(self.stock_prefix),
            Selection::LicenseOnly => self.license.is_match(name),
        }
    }

    /// Resolves the template items to copy for `mode`.
    ///
    /// Items copied whole appear as a single entry; filtered directories
    /// contribute their selected children instead.
    pub fn plan(&self, mode: ScaffoldMode) -> Result<Vec<CopyEntry>> {
        let mut plan = Vec::new();
        for item in list_template_items(self.template_dir, self.source_suffixes)? {
            let relative = PathBuf::from(&item.name);
            if self.is_ignored(&relative) {
                debug!("Skipping ignored item '{}'.", item.name);
                continue;
            }
            let chosen = selection(item.policy, mode);
            debug!("Template item '{}': {:?}.", item.name, chosen);
            match chosen {
                Selection::Everything => plan.push(CopyEntry {
                    relative,
                    source: item.source,
                    is_dir: item.is_dir,
                }),
                Selection::Nothing => {}
                Selection::StockOnly | Selection::LicenseOnly if item.is_dir => {
                    for child in list_template_items(&item.source, self.source_suffixes)? {
                        let child_relative = relative.join(&child.name);
                        if self.keeps(chosen, &child.name) && !self.is_ignored(&child_relative) {
                            plan.push(CopyEntry {
                                relative: child_relative,
                                source: child.source,
                                is_dir: child.is_dir,
                            });
                        }
                    }
                }
                Selection::StockOnly | Selection::LicenseOnly => {
                    if self.keeps(chosen, &item.name) {
                        plan.push(CopyEntry {
                            relative,
                            source: item.source,
                            is_dir: item.is_dir,
                        });
                    }
                }
            }
        }
        Ok(plan)
    }

    /// Copies the planned entries, merging directories into existing ones.
    pub fn execute(&self, plan: &[CopyEntry]) -> Result<()> {
        for entry in plan {
            if entry.is_dir {
                self.copy_tree(&entry.source)?;
            } else {
                self.copy_file(&entry.source, &entry.relative)?;
            }
        }
        Ok(())
    }

    fn copy_tree(&self, source: &Path) -> Result<()> {
        let walker = WalkDir::new(source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| match e.path().strip_prefix(self.template_dir) {
                Ok(relative) => !self.is_ignored(relative),
                Err(_) => true,
            });
        for entry in walker {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(self.template_dir)
                .map_err(|e| Error::FileSystemError(e.to_string()))?;
            if entry.file_type().is_dir() {
                fs::create_dir_all(self.target_dir.join(relative))?;
            } else {
                self.copy_file(entry.path(), relative)?;
            }
        }
        Ok(())
    }

    fn copy_file(&self, source: &Path, relative: &Path) -> Result<()> {
        let dest = self.target_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Copying file: {}", dest.display());
        fs::copy(source, &dest)?;
        Ok(())
    }

    /// Makes sure `assets/` exists in the target, whatever was copied.
    pub fn ensure_assets_dir(&self) -> Result<()> {
        let assets = self.target_dir.join(ASSETS_DIR);
        if !assets.is_dir() {
            fs::create_dir_all(&assets)?;
            println!("{} created", assets.display());
        }
        Ok(())
    }

    /// Plans, announces and performs the copy for `mode`.
    pub fn run(&self, mode: ScaffoldMode) -> Result<Vec<CopyEntry>> {
        let plan = self.plan(mode)?;
        println!("copying these items to {}:", self.target_dir.display());
        for entry in &plan {
            println!("{}", entry.display_path());
        }
        self.execute(&plan)?;
        self.ensure_assets_dir()?;
        Ok(plan)
    }
}
