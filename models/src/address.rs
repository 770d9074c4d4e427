use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::net::IpAddr;
use std::panic::Location;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// Where an address was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressScope {
    /// Bound to one of the host's interfaces.
    Local,
    /// Reported by an external "what is my IP" service.
    Public,
}

/// One classified, non-loopback network address.
///
/// Fields are private so an instance can only come out of [`AddressInfo::new`]
/// or [`AddressInfo::parse`], both of which reject loopback addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressInfo {
    address: String,
    version: IpVersion,
    scope: AddressScope,
}

impl AddressInfo {
    /// Classify `ip` and tag it with `scope`.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are unwrapped and stored as V4.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] for loopback addresses.
    #[track_caller]
    pub fn new(ip: IpAddr, scope: AddressScope) -> Result<Self, ModelError> {
        let ip = ip.to_canonical();

        if ip.is_loopback() {
            return Err(ModelError::Validation {
                message: format!("Loopback address {ip} is not a host address"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let version = match ip {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        };

        Ok(Self {
            address: ip.to_string(),
            version,
            scope,
        })
    }

    #[track_caller]
    pub fn local(ip: IpAddr) -> Result<Self, ModelError> {
        Self::new(ip, AddressScope::Local)
    }

    #[track_caller]
    pub fn public(ip: IpAddr) -> Result<Self, ModelError> {
        Self::new(ip, AddressScope::Public)
    }

    /// Parse an IP literal (surrounding whitespace ignored) and classify it.
    #[track_caller]
    pub fn parse(text: &str, scope: AddressScope) -> Result<Self, ModelError> {
        let trimmed = text.trim();
        let ip: IpAddr = trimmed.parse().map_err(|_| ModelError::Validation {
            message: format!("Not an IP address literal: {trimmed:?}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::new(ip, scope)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    pub fn scope(&self) -> AddressScope {
        self.scope
    }

    pub fn is_v4(&self) -> bool {
        self.version == IpVersion::V4
    }
}

impl fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.version)
    }
}
