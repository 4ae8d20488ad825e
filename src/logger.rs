/// Initializes `env_logger` for one of the yginit binaries.
///
/// `--verbose` enables debug output; `RUST_LOG` still takes precedence.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
