use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = Vue3ScanError::Config("pattern has no capture group".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: pattern has no capture group"
    );
}

#[test]
fn error_display_file_read() {
    let err = Vue3ScanError::FileRead {
        path: PathBuf::from("src/components/Widget/Widget.vue"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("Widget.vue"));
}

#[test]
fn error_display_invalid_root() {
    let err = Vue3ScanError::InvalidRoot(PathBuf::from("missing-dir"));
    assert_eq!(
        err.to_string(),
        "Scan root is not a directory: missing-dir"
    );
}

#[test]
fn error_file_read_keeps_source() {
    use std::error::Error as _;

    let err = Vue3ScanError::FileRead {
        path: PathBuf::from("a.vue"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.source().is_some());
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        Vue3ScanError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        Vue3ScanError::FileRead {
            path: PathBuf::from("a.vue"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        Vue3ScanError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(
        Vue3ScanError::Advisor("test".to_string()).error_type(),
        "Advisor"
    );
}

#[test]
fn config_errors_are_classified() {
    assert!(Vue3ScanError::Config("x".to_string()).is_config_error());
    assert!(
        Vue3ScanError::InvalidRule {
            pattern: "(".to_string(),
            source: regex::Regex::new("(").unwrap_err(),
        }
        .is_config_error()
    );
    assert!(!Vue3ScanError::InvalidRoot(PathBuf::from("x")).is_config_error());
    assert!(!Vue3ScanError::Io(std::io::Error::other("x")).is_config_error());
}
