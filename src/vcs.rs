//! Reading the revision of the YourGameLib checkout, for provenance stamping.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Hexadecimal id of the commit the library is checked out at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity(String);

impl CommitIdentity {
    pub fn new<S: Into<String>>(sha: S) -> Self {
        Self(sha.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the HEAD commit of the repository rooted exactly at `root`.
///
/// # Errors
/// * `Error::VcsUnavailable` if `root` is not a repository, HEAD is unborn
///   or the commit object cannot be read
pub fn read_commit<P: AsRef<Path>>(root: P) -> Result<CommitIdentity> {
    let root = root.as_ref();
    let unavailable = |source: git2::Error| Error::VcsUnavailable {
        root: root.display().to_string(),
        source,
    };

    let repo = git2::Repository::open(root).map_err(unavailable)?;
    let commit = repo.head().and_then(|head| head.peel_to_commit()).map_err(unavailable)?;
    debug!("Library HEAD is {}.", commit.id());
    Ok(CommitIdentity(commit.id().to_string()))
}
