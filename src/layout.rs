//! Locating the YourGameLib installation and relating new projects to it.

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::constants::{INIT_DIR, TEMPLATE_DIR};
use crate::error::{Error, Result};

/// Absolute paths of a YourGameLib installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    root: PathBuf,
    template_dir: PathBuf,
}

impl LibraryLayout {
    /// Builds the layout of the library at `root`.
    ///
    /// # Errors
    /// * `Error::TemplateDirMissing` if `<root>/init/template` is not a directory
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = absolutize(root.as_ref())?;
        let template_dir = root.join(INIT_DIR).join(TEMPLATE_DIR);
        if !template_dir.is_dir() {
            return Err(Error::TemplateDirMissing {
                template_dir: template_dir.display().to_string(),
            });
        }
        Ok(Self { root, template_dir })
    }

    /// Uses `explicit` when given, otherwise searches upwards from the running
    /// executable for a directory containing `init/template`.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit {
            debug!("Using library root '{}' from the command line.", root.display());
            return Self::new(root);
        }
        let exe = std::env::current_exe()?;
        let start = exe.parent().unwrap_or(exe.as_path());
        Self::find_from(start)
    }

    /// Walks the ancestors of `start` (inclusive) and returns the first library layout found.
    pub fn find_from<P: AsRef<Path>>(start: P) -> Result<Self> {
        let start = start.as_ref();
        for candidate in start.ancestors() {
            if candidate.join(INIT_DIR).join(TEMPLATE_DIR).is_dir() {
                debug!("Found library root at '{}'.", candidate.display());
                return Self::new(candidate);
            }
        }
        Err(Error::LibraryRootNotFound { searched_from: start.display().to_string() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Directory holding the template and the optional configuration file.
    pub fn init_dir(&self) -> PathBuf {
        self.root.join(INIT_DIR)
    }

    /// Path from `target_dir` back to the library root, with `/` separators.
    ///
    /// Computed lexically, so `target_dir` does not have to exist yet.
    pub fn relative_root<P: AsRef<Path>>(&self, target_dir: P) -> Result<String> {
        let target = absolutize(target_dir.as_ref())?;
        let relative = pathdiff::diff_paths(&self.root, &target).ok_or_else(|| {
            Error::FileSystemError(format!(
                "cannot express '{}' relative to '{}'",
                self.root.display(),
                target.display()
            ))
        })?;
        Ok(to_forward_slashes(&relative))
    }
}

/// Makes `path` absolute against the working directory and folds `.` and `..`.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

/// Lexical normalization, no filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Joins the components of `path` with `/` regardless of the host convention.
pub fn to_forward_slashes(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        return ".".to_string();
    }
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
