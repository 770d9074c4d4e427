use crate::error::scan::ScanError;

use sysinfo::System;

/// Host name as reported by the operating system.
///
/// # Errors
///
/// Returns [`ScanError::Hostname`] when the platform reports none, or an empty one.
#[track_caller]
pub fn local_hostname() -> Result<String, ScanError> {
    match System::host_name() {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Some(_) => Err(ScanError::hostname("Operating system reported an empty host name")),
        None => Err(ScanError::hostname("Operating system did not report a host name")),
    }
}
