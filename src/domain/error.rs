//! Error types for the zroster plugin.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zroster plugin operations.
///
/// Fetch failures (`Http`, `Decode`, `PermissionDenied`) are terminal for the
/// plugin session: they are turned into an inline notice and never retried.
///
/// # Examples
///
/// ```
/// use zroster::RosterError;
///
/// let err = RosterError::Http { status: 404, reason: "Not Found".to_string() };
/// assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// The directory endpoint answered with a non-2xx status.
    ///
    /// The Zellij host also reports transport failures (DNS, TLS, refused
    /// connections) through this path, as a non-2xx `WebRequestResult`.
    #[error("HTTP error: {status} {reason}")]
    Http {
        /// Response status code.
        status: u16,
        /// Canonical reason phrase for `status`.
        reason: String,
    },

    /// A successful response body could not be decoded as directory JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The user refused the `WebAccess` permission, so no request can be issued.
    #[error("Web access permission denied")]
    PermissionDenied,

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zroster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
