use std::io;

use tfdocgen::error::Error;

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

    let err = Error::Scan {
        line: 3,
        reason: "stream did not contain valid UTF-8".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to scan document at line 3: stream did not contain valid UTF-8."
    );

    let err = Error::ModuleLoad("Missing name".to_string());
    assert_eq!(err.to_string(), "Problem loading module: Missing name.");
}
