use std::io;

use apicrud::error::ApicrudError;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: ApicrudError = io_err.into();

    match err {
        ApicrudError::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = ApicrudError::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = ApicrudError::ValidationError("model name must not be empty".to_string());
    assert_eq!(err.to_string(), "Validation error: model name must not be empty.");

    let err = ApicrudError::RoutesError("could not locate 'routes/api.php'".to_string());
    assert_eq!(err.to_string(), "Routes error: could not locate 'routes/api.php'.");
}
