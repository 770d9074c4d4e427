//! Webhook secrets with redacted Debug/Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::de::{Deserialize, Deserializer};
use serde::ser::Error;
use zeroize::Zeroize;

/// A secret string (webhook token, full webhook URL) that never shows up in
/// logs or debug output. The backing buffer is zeroed on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RedactedSecret {
    inner: String,
}

impl RedactedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Get the actual value for transmission.
    ///
    /// # Security Note
    /// Only call this when the value is handed to the HTTP client.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Length of the secret (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends `suffix` to the secret, e.g. a base URL plus its token path.
    pub fn joined(prefix: &str, suffix: &RedactedSecret) -> Self {
        let mut inner = String::with_capacity(prefix.len() + suffix.len());
        inner.push_str(prefix);
        inner.push_str(suffix.expose());
        Self { inner }
    }
}

impl fmt::Debug for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedSecret([REDACTED])")
    }
}

impl fmt::Display for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for RedactedSecret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<'de> Deserialize<'de> for RedactedSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(RedactedSecret::new)
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedSecret {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedSecret cannot be serialized - use expose() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
