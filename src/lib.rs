//! yginit is the project tooling of YourGameLib.
//! It scaffolds new game projects from the library template, drives their
//! CMake/Gradle builds and post-processes clang-tidy and clang-format runs.

/// Command-line interfaces of the yginit binaries
pub mod cli;

/// Optional scaffold configuration (yginit.json, yginit.yml, yginit.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// File copying with the mode-dependent policy table
pub mod copier;

/// clang-format batch runner
pub mod format;

/// Template paths that are never copied
pub mod ignore;

/// Library root discovery and relative paths
pub mod layout;

pub mod logger;

/// Build driver for scaffolded projects
pub mod make;

/// External command execution
pub mod process;

/// Rendering of the project files with MiniJinja
pub mod renderer;

/// Validated scaffold input
pub mod request;

/// The initializer pipeline
/// Combines all components to create a new project
pub mod scaffold;

/// clang-tidy log parsing
pub mod tidy;

/// Library revision lookup
pub mod vcs;
