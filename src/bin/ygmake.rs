//! Configures and builds a scaffolded project for desktop, android and web.

use yginit::{
    cli::{get_make_args, MakeArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
    make::{BuildDriver, Platform, Profile},
    process::SystemRunner,
};

fn main() {
    let args = get_make_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: MakeArgs) -> Result<()> {
    let project_root = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let runner = SystemRunner;
    let driver = BuildDriver::new(&project_root, Profile::from_release_flag(args.release), &runner)
        .with_generator(args.generator);

    if args.clean {
        driver.clean()?;
        return Ok(());
    }

    let platforms = [
        (args.desktop, Platform::Desktop),
        (args.android, Platform::Android),
        (args.web, Platform::Web),
    ];
    for (_, platform) in platforms.into_iter().filter(|(selected, _)| *selected) {
        driver.build(platform)?;
    }
    Ok(())
}
