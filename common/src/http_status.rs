//! HTTP status code classification shared by the API client and its callers.

/// Status codes the API client retries automatically.
pub const TRANSIENT_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// HTTP status code carried by API errors.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const NO_CONTENT: HttpStatusCode = HttpStatusCode(204);

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors (not retried).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Transient failures eligible for automatic retry.
    pub fn is_transient(&self) -> bool {
        TRANSIENT_STATUS_CODES.contains(&self.0)
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
