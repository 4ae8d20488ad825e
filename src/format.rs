//! Running clang-format in place over the library sources.
//! There is no preview and no undo, formatting rewrites the files directly.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::FORMAT_FILE_LIST;
use crate::error::{Error, Result};
use crate::layout::to_forward_slashes;
use crate::process::{CommandRunner, Invocation};

/// Files handed to clang-format, relative to the repository root.
pub const FORMAT_PATTERNS: [&str; 4] =
    ["src/**/*.*", "include/**/*.*", "test/main.cpp", "test/testcases/*.*"];

fn build_format_set() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in FORMAT_PATTERNS {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::PatternError(format!("'{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::PatternError(e.to_string()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Lists the files below `root` matching [`FORMAT_PATTERNS`], sorted.
/// Hidden files and everything inside hidden directories are skipped.
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let patterns = build_format_set()?;
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::FileSystemError(e.to_string()))?;
        if patterns.is_match(to_forward_slashes(relative)) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Formats every collected file in place with `clang_format`.
///
/// The file list is written next to the sources and removed afterwards,
/// also when clang-format fails. A formatter failure is reported in favour of
/// a failed cleanup.
pub fn run_clang_format<P: AsRef<Path>>(
    root: P,
    clang_format: &str,
    runner: &dyn CommandRunner,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let files = collect_files(root)?;
    debug!("Formatting {} files.", files.len());

    let list_path = root.join(FORMAT_FILE_LIST);
    let listing: String = files.iter().map(|f| format!("{}\n", f.display())).collect();
    fs::write(&list_path, listing)?;

    let invocation = Invocation::new(clang_format, root)
        .arg("-i")
        .arg(format!("--files={}", list_path.display()));
    let formatted = runner.run(&invocation);
    let cleanup = fs::remove_file(&list_path);
    if let Err(err) = formatted {
        if let Err(cleanup_err) = cleanup {
            warn!("Could not remove '{}': {cleanup_err}", list_path.display());
        }
        return Err(err);
    }
    cleanup?;
    Ok(files)
}
