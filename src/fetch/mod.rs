//! Data fetcher for the employee directory.
//!
//! The plugin issues exactly one GET through Zellij's `web_request` host call.
//! The host answers asynchronously with a `WebRequestResult` event carrying the
//! status code, body and the context map attached to the request.
//!
//! ```text
//! load → WebAccess granted → FetchRequest → web_request()
//!                                               │
//!        AppState ← parse_response ← WebRequestResult(status, body, context)
//! ```
//!
//! No retries and no timeout: the first failure is terminal for the session.

pub mod request;
pub mod response;

pub use request::{DirectoryQuery, FetchRequest, DEFAULT_API_URL};
pub use response::{parse_response, reason_phrase};
