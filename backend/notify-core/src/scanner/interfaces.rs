use crate::error::scan::ScanError;

use common::ErrorLocation;
use models::{AddressInfo, ModelError};

use std::io;
use std::net::IpAddr;
use std::panic::Location;

use log::{debug, trace};

/// One address bound to a named interface, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub ip: IpAddr,
}

impl InterfaceAddress {
    pub fn new(interface: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            interface: interface.into(),
            ip,
        }
    }
}

/// Anything that can list the host's interface addresses.
///
/// Implemented for plain closures so tests can hand in fixed lists.
pub trait InterfaceSource {
    fn interfaces(&self) -> io::Result<Vec<InterfaceAddress>>;
}

impl<F> InterfaceSource for F
where
    F: Fn() -> io::Result<Vec<InterfaceAddress>>,
{
    fn interfaces(&self) -> io::Result<Vec<InterfaceAddress>> {
        self()
    }
}

/// The operating system's interface table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> io::Result<Vec<InterfaceAddress>> {
        let interfaces = if_addrs::get_if_addrs()?
            .into_iter()
            .map(|iface| {
                let ip = iface.ip();
                InterfaceAddress::new(iface.name, ip)
            })
            .collect();

        Ok(interfaces)
    }
}

/// Classify every non-loopback address reported by `source`.
///
/// Order follows the source's enumeration order. A host with only loopback
/// addresses yields an empty list.
///
/// # Errors
///
/// Returns [`ScanError::Enumeration`] if the interface list cannot be read.
#[track_caller]
pub fn discover_from(source: &impl InterfaceSource) -> Result<Vec<AddressInfo>, ScanError> {
    let bound = source
        .interfaces()
        .map_err(|e| ScanError::Enumeration {
            message: format!("Failed to enumerate network interfaces: {e}"),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    trace!("Enumerated {} interface address(es)", bound.len());

    let addresses: Vec<AddressInfo> = bound
        .into_iter()
        .filter_map(|entry| match AddressInfo::local(entry.ip) {
            Ok(info) => {
                debug!("Interface {}: {info}", entry.interface);
                Some(info)
            }
            Err(ModelError::Validation { message, .. }) => {
                trace!("Skipping {} on {}: {message}", entry.ip, entry.interface);
                None
            }
        })
        .collect();

    debug!("Discovered {} local address(es)", addresses.len());
    Ok(addresses)
}

/// Discover the host's local addresses from the system interface table.
#[track_caller]
pub fn discover_local_addresses() -> Result<Vec<AddressInfo>, ScanError> {
    discover_from(&SystemInterfaces)
}
