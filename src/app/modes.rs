//! Input and modal state types for the application.
//!
//! These enums decide which keybindings are active and which overlays are
//! drawn.
//!
//! # State Machine
//!
//! Input modes:
//! - **Normal**: gallery navigation and commands
//! - **Search**: the search bar has focus (typing) or the filtered gallery
//!   does (navigating)
//!
//! The detail modal is independent of the input mode:
//!
//! ```text
//! Hidden ──card click──▶ Open(idx) ──prev/next──▶ Open(idx')
//!    ▲                      │
//!    └──────── close ───────┘
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Key presses edit the query; every key re-runs the filter.
    Typing,

    /// The query was submitted; j/k move over the filtered cards.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Keybindings: j/k (select card), Enter (open), / (search), q (hide).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Visibility of the detail modal.
///
/// The modal index lives next to this flag in
/// [`AppState`](super::AppState) and survives `Hidden`, matching a hidden
/// overlay that still holds its last content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Open,
}
