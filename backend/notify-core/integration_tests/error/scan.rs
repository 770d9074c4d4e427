use notify_core::error::{CoreError, ScanError};

use common::ErrorLocation;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;

/// **VALUE**: `ScanError::Enumeration` shows its kind, message and location and keeps
/// the io error as its source.
///
/// **WHY THIS MATTERS**: Scan failures are fatal and logged once before exit. That single
/// line has to be enough to diagnose the problem.
///
/// **BUG THIS CATCHES**: Would catch `#[source]` or the location being dropped.
#[test]
fn given_enumeration_error_when_formatted_then_includes_location_and_source() {
    // GIVEN: An enumeration error
    let err = ScanError::Enumeration {
        message: "Failed to enumerate network interfaces".to_string(),
        location: ErrorLocation::from(Location::caller()),
        source: IoError::new(ErrorKind::PermissionDenied, "denied"),
    };

    // WHEN: Formatting
    let text = err.to_string();

    // THEN: Kind, message, file and a source
    assert!(text.contains("Interface Enumeration Error"));
    assert!(text.contains("Failed to enumerate network interfaces"));
    assert!(text.contains("scan.rs"));
    assert!(err.source().is_some());
}

#[test]
fn given_hostname_error_when_built_then_location_points_at_caller() {
    let err = ScanError::hostname("no host name");

    match &err {
        ScanError::Hostname { location, .. } => assert!(location.file.contains("scan.rs")),
        other => panic!("Expected hostname error, got {other:?}"),
    }
}

#[test]
fn given_scan_error_when_converted_to_core_error_then_display_is_transparent() {
    let err = ScanError::hostname("no host name");
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
}
