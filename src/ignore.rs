//! Paths of the template that are never copied into a new project.
//! Editor and OS droppings are always skipped; the configuration can add more.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};

/// Patterns that are ignored even without configuration.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = ["**/.DS_Store", "**/Thumbs.db"];

/// Builds the ignore set from the defaults plus `extra` patterns.
///
/// Patterns are matched against paths relative to the template root, using
/// `/` separators.
pub fn build_ignore_set<S: AsRef<str>>(extra: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let patterns = DEFAULT_IGNORE_PATTERNS
        .iter()
        .copied()
        .chain(extra.iter().map(AsRef::as_ref));
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::PatternError(format!("invalid ignore pattern '{pattern}': {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::PatternError(format!("ignore set: {e}")))
}
