//! Domain errors surfaced by the REST service layer.

use thiserror::Error;

/// Failure reported by a service call, after transport mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the credentials (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    #[error("not found")]
    NotFound,
    /// Any other non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The request never completed (connectivity, CORS, abort).
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the wire contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status code to a domain error.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }

    /// Whether this failure signals a credential mismatch.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_mapping_distinguishes_auth_failures() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert!(ApiError::from_status(401).is_unauthorized());
        assert!(!ApiError::from_status(503).is_unauthorized());
    }
}
