//! Prints the distinct findings of a clang-tidy log grouped by file.

use std::fs::File;
use std::io::{self, BufReader};

use yginit::{
    cli::{get_tidy_args, TidyArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
    tidy::{write_report, Severity, TidyLogParser},
};

fn main() {
    let args = get_tidy_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: TidyArgs) -> Result<()> {
    let parser = TidyLogParser::new()?;
    let findings = parser.parse(BufReader::new(File::open(&args.file)?))?;
    log::debug!("{} distinct findings in {}.", findings.len(), args.file.display());

    let selected = findings
        .iter()
        .filter(|finding| !args.errors_only || finding.severity == Severity::Error);
    write_report(io::stdout().lock(), selected)
}
