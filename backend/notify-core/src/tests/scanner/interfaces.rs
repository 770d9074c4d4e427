// Unit tests for interface classification
// The system interface table is exercised in integration_tests/scanner/interfaces.rs

use crate::error::scan::ScanError;
use crate::scanner::{InterfaceAddress, discover_from};

use models::{AddressInfo, AddressScope, IpVersion, ModelError};

use std::io::{self, ErrorKind};
use std::net::IpAddr;

fn entry(interface: &str, ip: &str) -> InterfaceAddress {
    InterfaceAddress::new(interface, ip.parse::<IpAddr>().unwrap())
}

/// **VALUE**: A host with only loopback addresses yields an empty list, not an error.
///
/// **WHY THIS MATTERS**: Containers without networking still need to send alerts (via a
/// unix-socket proxy, for example). Treating "no addresses" as fatal would silence them.
///
/// **BUG THIS CATCHES**: Would catch an `is_empty()` check that returns `ScanError`.
#[test]
fn given_only_loopback_interfaces_when_discovering_then_returns_empty_list() {
    // GIVEN: An interface table with IPv4 and IPv6 loopback only
    let source = || -> io::Result<Vec<InterfaceAddress>> {
        Ok(vec![entry("lo", "127.0.0.1"), entry("lo", "::1")])
    };

    // WHEN: Discovering
    let result = discover_from(&source);

    // THEN: Ok and empty
    let addresses = result.expect("Loopback-only host must not be an error");
    assert!(addresses.is_empty());
}

/// **VALUE**: Non-loopback addresses are kept in enumeration order and tagged Local.
///
/// **WHY THIS MATTERS**: The composer shows the first address when it has to fall back,
/// so order has to be exactly what the OS reported.
///
/// **BUG THIS CATCHES**: Would catch a sort or dedup creeping into discovery.
#[test]
fn given_mixed_interfaces_when_discovering_then_keeps_enumeration_order() {
    // GIVEN: loopback, v4, v6 and another v4 across interfaces
    let source = || -> io::Result<Vec<InterfaceAddress>> {
        Ok(vec![
            entry("lo", "127.0.0.1"),
            entry("eth0", "192.168.1.10"),
            entry("eth0", "fe80::8811:86eb:a566:5033"),
            entry("wlan0", "10.0.0.5"),
        ])
    };

    // WHEN: Discovering
    let addresses = discover_from(&source).unwrap();

    // THEN: Loopback dropped, order kept, versions classified
    let rendered: Vec<(&str, IpVersion)> = addresses
        .iter()
        .map(|a| (a.address(), a.version()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("192.168.1.10", IpVersion::V4),
            ("fe80::8811:86eb:a566:5033", IpVersion::V6),
            ("10.0.0.5", IpVersion::V4),
        ]
    );
    assert!(addresses.iter().all(|a| a.scope() == AddressScope::Local));
}

#[test]
fn given_empty_interface_table_when_discovering_then_returns_empty_list() {
    let source = || -> io::Result<Vec<InterfaceAddress>> { Ok(Vec::new()) };

    let addresses = discover_from(&source).unwrap();

    assert!(addresses.is_empty());
}

/// **VALUE**: Enumeration failures surface as `ScanError::Enumeration` with the io source.
///
/// **WHY THIS MATTERS**: Without the io error the operator cannot tell a sandbox
/// permission problem from a platform bug.
///
/// **BUG THIS CATCHES**: Would catch the error being swallowed into an empty list.
#[test]
fn given_failing_source_when_discovering_then_returns_enumeration_error() {
    // GIVEN: A source that cannot read the interface table
    let source = || -> io::Result<Vec<InterfaceAddress>> {
        Err(io::Error::new(ErrorKind::PermissionDenied, "netlink denied"))
    };

    // WHEN: Discovering
    let result = discover_from(&source);

    // THEN: Enumeration error carrying the cause
    match result {
        Err(ScanError::Enumeration {
            message, source, ..
        }) => {
            assert!(message.contains("netlink denied"));
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("Expected enumeration error, got {other:?}"),
    }
}

/// **VALUE**: Entries rejected by address validation are skipped, including v4-mapped
/// loopback, while mapped non-loopback addresses are kept as V4.
///
/// **WHY THIS MATTERS**: Dual-stack sockets report `::ffff:a.b.c.d` forms. Skipped
/// entries are logged with the validation message, so that message has to name the
/// real reason.
///
/// **BUG THIS CATCHES**: Would catch mapped loopback leaking into alerts, or the skip
/// reason being replaced by a fixed label.
#[test]
fn given_v4_mapped_entries_when_discovering_then_rejected_ones_are_skipped() {
    // GIVEN: A mapped loopback and a mapped LAN address
    let source = || -> io::Result<Vec<InterfaceAddress>> {
        Ok(vec![entry("lo", "::ffff:127.0.0.1"), entry("eth0", "::ffff:10.0.0.5")])
    };

    // WHEN: Discovering
    let addresses = discover_from(&source).unwrap();

    // THEN: Only the canonical LAN address remains
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].address(), "10.0.0.5");
    assert_eq!(addresses[0].version(), IpVersion::V4);

    let skipped = "::ffff:127.0.0.1".parse::<IpAddr>().unwrap();
    match AddressInfo::local(skipped) {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("Loopback"), "got: {message}")
        }
        Ok(info) => panic!("Expected mapped loopback to be rejected, got {info}"),
    }
}
