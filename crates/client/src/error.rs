//! Error types for the age signals vendor integration.
//!
//! The vendor reports failures with small negative integer codes. Codes the
//! current API version documents are modeled by [`ErrorCode`]; the error type
//! itself carries the raw integer so unrecognized codes survive untouched.

use thiserror::Error;

/// Generic/internal error code used when the vendor reports no typed code.
pub const INTERNAL_ERROR_CODE: i32 = -100;

/// Error codes documented by the age signals API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The age signals API is not available on this device.
    ApiNotAvailable,
    /// No store app was found on the device.
    StoreNotFound,
    /// A network error occurred while contacting the service.
    NetworkError,
    /// Platform services are missing.
    ServicesNotFound,
    /// The client could not bind to the signals service.
    CannotBindToService,
    /// The installed store app is too old to serve the request.
    StoreVersionOutdated,
    /// Platform services are too old to serve the request.
    ServicesVersionOutdated,
    /// A transient client-side failure; the caller may retry.
    ClientTransientError,
    /// The requesting app is not owned by the current account.
    AppNotOwned,
    /// Internal error inside the vendor SDK or service.
    InternalError,
}

impl ErrorCode {
    /// Returns the wire integer for this code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ApiNotAvailable => -1,
            Self::StoreNotFound => -2,
            Self::NetworkError => -3,
            Self::ServicesNotFound => -4,
            Self::CannotBindToService => -5,
            Self::StoreVersionOutdated => -6,
            Self::ServicesVersionOutdated => -7,
            Self::ClientTransientError => -8,
            Self::AppNotOwned => -9,
            Self::InternalError => -100,
        }
    }

    /// Parses a wire integer into a documented code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::ApiNotAvailable),
            -2 => Some(Self::StoreNotFound),
            -3 => Some(Self::NetworkError),
            -4 => Some(Self::ServicesNotFound),
            -5 => Some(Self::CannotBindToService),
            -6 => Some(Self::StoreVersionOutdated),
            -7 => Some(Self::ServicesVersionOutdated),
            -8 => Some(Self::ClientTransientError),
            -9 => Some(Self::AppNotOwned),
            -100 => Some(Self::InternalError),
            _ => None,
        }
    }

    /// Returns true if the condition is expected to clear on a later attempt.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::ApiNotAvailable
                | Self::StoreNotFound
                | Self::NetworkError
                | Self::ServicesNotFound
                | Self::CannotBindToService
                | Self::StoreVersionOutdated
                | Self::ServicesVersionOutdated
                | Self::ClientTransientError
        )
    }
}

/// Errors that can occur when checking age signals.
#[derive(Debug, Clone, Error)]
pub enum AgeSignalsError {
    /// The vendor service reported a typed failure.
    #[error("age signals API error {code}: {message}")]
    Api {
        /// Raw vendor error code.
        code: i32,
        /// Vendor-supplied message (may be empty).
        message: String,
    },

    /// Network error with no typed vendor code.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The service answered with something other than the documented schema.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AgeSignalsError {
    /// Creates a typed API error from a vendor code and message.
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Returns the vendor's typed error code, if this failure carries one.
    #[must_use]
    pub const fn typed_code(&self) -> Option<i32> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the human-readable detail without the error-kind prefix.
    ///
    /// For typed API errors this is the vendor-supplied message verbatim.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true if a later attempt may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { code, .. } => {
                ErrorCode::from_code(*code).is_some_and(ErrorCode::is_retryable)
            }
            Self::Network(_) | Self::Timeout(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AgeSignalsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AgeSignalsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for age signals operations.
pub type Result<T> = std::result::Result<T, AgeSignalsError>;
