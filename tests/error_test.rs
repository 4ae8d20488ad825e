use std::io;

use yginit::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateDirMissing { template_dir: "/lib/init/template".to_string() };
    assert!(err.to_string().contains("/lib/init/template"));
}

#[test]
fn test_exit_codes() {
    let err = Error::CommandFailed {
        command: "cmake --build .".to_string(),
        code: 2,
    };
    assert_eq!(err.exit_code(), 2);
    assert_eq!(Error::ArgumentError("empty".to_string()).exit_code(), 1);
}
