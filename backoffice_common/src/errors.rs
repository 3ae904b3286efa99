//! Error types for the backoffice administration client.
//!
//! Every error here is terminal for the current invocation: it is reported
//! to diagnostic output at the outermost level and converted into a
//! non-zero process exit. Nothing is retried.

use thiserror::Error;

/// **An application-specific error type**
///
/// Variants carry the context needed for a useful CLI message. Errors from
/// foreign crates (reqwest, jsonwebtoken) are captured as messages via the
/// helper constructors so the type stays comparable in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackofficeError {
    /// The amount argument did not parse as a decimal number.
    #[error("Invalid amount '{input}': expected a decimal number like '150' or '9.99'")]
    InvalidAmount {
        /// The offending argument
        input: String,
    },

    /// The currency argument is not one of the recognized codes.
    #[error("Unsupported currency '{code}': expected one of UYU, USD, USDc")]
    UnsupportedCurrency {
        /// The offending argument
        code: String,
    },

    /// No bearer token was supplied for an operation that mutates state.
    #[error("A bearer token is required for this operation")]
    MissingCredential,

    /// Neither the token's subject claim nor the pending-accounts lookup
    /// produced a user id.
    #[error("Could not resolve a user id for '{target}'")]
    IdentityUnresolved {
        /// The email or identifier that failed to resolve
        target: String,
    },

    /// The backend answered with a non-2xx status, or with a body whose
    /// success flag is explicitly false.
    #[error("Backend request failed with status {status}: {body}")]
    BackendRequestFailed {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body, passed through for diagnostics
        body: String,
    },

    /// A transport-level failure: DNS, connection refused, broken stream.
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The bearer token could not be decoded as a compact three-segment
    /// token. Non-fatal during identity resolution.
    #[error("Token decode error: {message}")]
    TokenDecode {
        /// Description of the decode failure
        message: String,
    },
}

impl BackofficeError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        BackofficeError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an UnsupportedCurrency error
    pub fn unsupported_currency(code: &str) -> Self {
        BackofficeError::UnsupportedCurrency {
            code: code.to_string(),
        }
    }

    /// Create an IdentityUnresolved error
    pub fn identity_unresolved(target: &str) -> Self {
        BackofficeError::IdentityUnresolved {
            target: target.to_string(),
        }
    }

    /// Create a BackendRequestFailed error
    pub fn backend_request_failed(status: u16, body: &str) -> Self {
        BackofficeError::BackendRequestFailed {
            status,
            body: body.to_string(),
        }
    }

    /// Create a Network error from any transport-level failure
    pub fn network(err: impl std::fmt::Display) -> Self {
        BackofficeError::Network {
            message: err.to_string(),
        }
    }

    /// Create a TokenDecode error from any decode failure
    pub fn token_decode(err: impl std::fmt::Display) -> Self {
        BackofficeError::TokenDecode {
            message: err.to_string(),
        }
    }
}
