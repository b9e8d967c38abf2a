//! Tests for rift-mc error handling

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_type_mismatch() {
    let err = RiftError::type_mismatch("keys-motion-pre", "a count");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::TypeMismatch);
    assert_eq!(err.code, "TYPE_MISMATCH");
    assert!(err.contains_msg("keys-motion-pre"));
    assert!(err.contains_msg("a count"));
}

#[test]
fn test_malformed_keys() {
    let err = RiftError::malformed_keys("count without a command");
    assert_eq!(err.kind, ErrorType::MalformedKeyVector);
    assert_eq!(err.code, "MALFORMED_KEY_VECTOR");
    assert_eq!(err.message, "count without a command");
}

#[test]
fn test_in_command_prefixes_message() {
    let err = RiftError::malformed_keys("bad prefix").in_command("delete");
    assert_eq!(err.message, "delete: bad prefix");
    assert_eq!(err.kind, ErrorType::MalformedKeyVector);
}

#[test]
fn test_rift_error_display() {
    let err = RiftError::type_mismatch("keys-pre", "a mode");
    assert_eq!(
        format!("{}", err),
        "[ERROR] TypeMismatch(TYPE_MISMATCH): slot 'keys-pre' holds a mode, expected a key vector"
    );
}

#[test]
fn test_warning() {
    let err = RiftError::warning(ErrorType::Internal, "STALE_RECORD", "dropped");
    assert_eq!(err.severity, ErrorSeverity::Warning);
    assert_eq!(err.kind, ErrorType::Internal);
}

#[test]
fn test_from_string_and_io() {
    let err: RiftError = "oops".into();
    assert_eq!(err.kind, ErrorType::Other);
    assert_eq!(err.code, "GENERIC_ERROR");

    let err: RiftError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
    assert_eq!(err.kind, ErrorType::Settings);
    assert_eq!(err.code, "IO_ERROR");
    assert!(err.contains_msg("missing"));
}

#[test]
fn test_manager_keeps_recent_errors() {
    let mut manager = ErrorManager::with_capacity(2);
    assert!(manager.is_empty());

    manager.handle(RiftError::from("first"));
    manager.handle(RiftError::from("second"));
    manager.handle(RiftError::from("third"));

    assert_eq!(manager.len(), 2);
    let messages: Vec<_> = manager.errors().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["second", "third"]);
    assert_eq!(manager.last().map(|e| e.message.as_str()), Some("third"));

    manager.clear();
    assert!(manager.last().is_none());
}
