//! yginit's entry point: creates a new YourGameLib project from the template.

use yginit::{
    cli::{get_init_args, InitArgs},
    error::{default_error_handler, Result},
    layout::LibraryLayout,
    logger::init_logger,
    request::ScaffoldRequest,
    scaffold::Scaffolder,
};

/// Main application entry point.
fn main() {
    let args = get_init_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Builds the request from the arguments
/// 2. Locates the library installation and its configuration
/// 3. Reads the library commit
/// 4. Copies the template into the new project
/// 5. Renders the project files
fn run(args: InitArgs) -> Result<()> {
    let request = ScaffoldRequest::try_from(&args)?;
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let layout = LibraryLayout::locate(args.lib_root.as_deref())?;
    let scaffolder = Scaffolder::new(layout)?;
    let report = scaffolder.run(&request, output_dir)?;

    println!(
        "Project '{}' initialized in {}.",
        request.name(),
        report.target_dir.display()
    );
    Ok(())
}
