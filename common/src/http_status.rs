//! HTTP status code helpers for response validation.

/// HTTP status code as returned by a webhook or lookup endpoint.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const OK: HttpStatusCode = HttpStatusCode(200);

    /// Exactly 200. Other 2xx codes are not treated as delivered.
    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// 4xx client errors (bad payload, revoked webhook).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
