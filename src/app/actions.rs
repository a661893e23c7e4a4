//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim in `main.rs` turns them into Zellij host calls. Keeping them as
//! data lets the whole application layer run under `cargo test` without a
//! Zellij host.
//!
//! # Example
//!
//! ```rust
//! use zroster::app::Action;
//! use zroster::fetch::FetchRequest;
//!
//! let actions = vec![
//!     Action::FetchDirectory(FetchRequest::new("https://randomuser.me/api/?results=12".into())),
//! ];
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the directory GET through `web_request`.
    ///
    /// Emitted at most once per plugin load.
    FetchDirectory(FetchRequest),
}
