//! Formats the library's sources, headers and tests in place with clang-format.

use yginit::{
    cli::{get_format_args, FormatArgs},
    error::{default_error_handler, Result},
    format::{collect_files, run_clang_format},
    logger::init_logger,
    process::SystemRunner,
};

fn main() {
    let args = get_format_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: FormatArgs) -> Result<()> {
    let root = match args.root {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if args.list {
        for file in collect_files(&root)? {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let formatted = run_clang_format(&root, &args.clang_format, &SystemRunner)?;
    println!("Formatted {} files.", formatted.len());
    Ok(())
}
