//! Host identity discovery.
//!
//! - [`interfaces`]: addresses bound to local network interfaces
//! - [`public`]: best-effort lookup of the internet-facing address
//! - [`host`]: the host name shown in every alert

pub mod host;
pub mod interfaces;
pub mod public;

pub use host::local_hostname;
pub use interfaces::{
    InterfaceAddress, InterfaceSource, SystemInterfaces, discover_from, discover_local_addresses,
};
pub use public::{PublicAddressLookup, discover_public_address};
