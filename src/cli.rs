//! Command-line interfaces of the yginit binaries.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Arguments of `yginit`, the project initializer.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Initialize a new YourGameLib project from template",
    long_about = None
)]
pub struct InitArgs {
    /// Name of the new project
    #[arg(value_name = "NAME", value_parser = parse_project_name)]
    pub name: String,

    /// Init stand-alone project that clones YourGameLib itself
    #[arg(long)]
    pub clone: bool,

    /// Bare project (no toolbox, minimal dependencies)
    #[arg(long)]
    pub bare: bool,

    /// Do not copy source files and assets/ from template
    #[arg(long = "noTemplate", visible_alias = "noStub", alias = "noSources")]
    pub no_template: bool,

    /// List of required external projects
    #[arg(long = "extProj", value_name = "NAME", num_args = 0..)]
    pub ext_proj: Vec<String>,

    /// Directory the new project is created in (defaults to the working directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// YourGameLib root (defaults to the installation this binary belongs to)
    #[arg(long, value_name = "DIR")]
    pub lib_root: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `ygmake`, the build driver of a scaffolded project.
#[derive(Parser, Debug)]
#[command(author, version, about = "Configure and build a YourGameLib project", long_about = None)]
pub struct MakeArgs {
    /// Configure and build, target desktop
    #[arg(short, long)]
    pub desktop: bool,

    /// Configure and build, target android
    #[arg(short, long)]
    pub android: bool,

    /// Configure and build, target web (WebAssembly)
    #[arg(short, long)]
    pub web: bool,

    /// Build release, default debug
    #[arg(long)]
    pub release: bool,

    /// Passed to CMake as generator (-G), not used for android
    #[arg(long, value_name = "NAME")]
    pub generator: Option<String>,

    /// Delete _build*/ and exit
    #[arg(long)]
    pub clean: bool,

    /// Project root (defaults to the working directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `yg-parse-clang-tidy`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Parse and process clang-tidy output", long_about = None)]
pub struct TidyArgs {
    /// clang-tidy log file (input)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only report errors, drop warnings
    #[arg(long)]
    pub errors_only: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `yg-run-clang-format`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run clang-format in place on all YourGameLib sources",
    long_about = None
)]
pub struct FormatArgs {
    /// Repository root containing src/, include/ and test/ (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// clang-format executable
    #[arg(long, value_name = "EXE", default_value = "clang-format")]
    pub clang_format: String,

    /// Print the files that would be formatted and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validates the project name: it becomes a directory name, so it must be
/// non-empty and a single path component.
pub fn parse_project_name(name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Err("project name must not be empty".to_string());
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!("'{name}' is not a valid directory name"));
    }
    Ok(name.to_string())
}

/// Parses the initializer's command line.
///
/// # Exits
/// * With status code 1 and the help text if the project name is missing
/// * With clap's default error handling for other argument errors
pub fn get_init_args() -> InitArgs {
    match InitArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                print_help_and_exit::<InitArgs>();
            } else {
                e.exit();
            }
        }
    }
}

/// Parses the build driver's command line.
///
/// # Exits
/// * With status code 1 and the help text if no argument was given at all
pub fn get_make_args() -> MakeArgs {
    if std::env::args_os().len() <= 1 {
        print_help_and_exit::<MakeArgs>();
    }
    MakeArgs::parse()
}

pub fn get_tidy_args() -> TidyArgs {
    match TidyArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                print_help_and_exit::<TidyArgs>();
            } else {
                e.exit();
            }
        }
    }
}

pub fn get_format_args() -> FormatArgs {
    FormatArgs::parse()
}

fn print_help_and_exit<A: CommandFactory>() -> ! {
    let _ = A::command().help_template(HELP_TEMPLATE).print_help();
    std::process::exit(1);
}
