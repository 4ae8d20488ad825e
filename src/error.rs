//! Error handling for the yginit tools.
//! Defines the error type and result alias shared by every binary.

use std::io;
use thiserror::Error;

/// Errors that can occur while scaffolding, building or post-processing a project.
///
/// The variants fall into the families the tools report to the user:
/// argument errors, filesystem errors, version-control errors, template
/// rendering errors and subprocess failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input that made it past (or around) the command line parser.
    #[error("Argument error: {0}.")]
    ArgumentError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Raised while walking a template or source tree
    #[error("Failed to walk directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The library installation has no template directory.
    #[error("Template directory '{template_dir}' does not exist, the YourGameLib installation looks incomplete.")]
    TemplateDirMissing { template_dir: String },

    /// No ancestor of the executable contains a library template directory.
    #[error("Could not locate the YourGameLib root above '{searched_from}', pass --lib-root.")]
    LibraryRootNotFound { searched_from: String },

    /// Any other filesystem precondition that does not hold.
    #[error("Filesystem error: {0}.")]
    FileSystemError(String),

    /// The library root is not a readable git repository.
    #[error("Cannot read the commit of '{root}': {source}.")]
    VcsUnavailable {
        root: String,
        #[source]
        source: git2::Error,
    },

    /// Loading or rendering a target template failed.
    #[error("Failed to render '{template}': {source}.")]
    TemplateRender {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A glob or regular expression failed to compile.
    #[error("Pattern error: {0}.")]
    PatternError(String),

    /// An external program could not be started at all.
    #[error("Failed to run '{command}': {source}.")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An external program ran and reported failure.
    #[error("Command '{command}' failed with exit code {code}.")]
    CommandFailed { command: String, code: i32 },
}

impl Error {
    /// Process exit code to report for this error.
    ///
    /// Subprocess failures pass the child's code through, everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
