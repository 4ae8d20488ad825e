//! Running external tools (CMake, Gradle, Emscripten, clang-format).

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// A command line together with the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<S: Into<String>, P: AsRef<Path>>(program: S, cwd: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes invocations. Implemented by [`SystemRunner`]; tests substitute a recorder.
pub trait CommandRunner {
    /// Runs `invocation` to completion.
    ///
    /// # Errors
    /// * `Error::CommandSpawn` if the program cannot be started
    /// * `Error::CommandFailed` if it exits unsuccessfully
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs invocations as child processes inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!("Running '{}' in '{}'.", invocation, invocation.cwd.display());
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|source| Error::CommandSpawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: invocation.to_string(),
                // Killed by a signal.
                code: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}
