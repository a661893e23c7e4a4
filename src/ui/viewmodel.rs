//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready data only: screen rectangles are already resolved from the
//! pane size, names already carry their highlight ranges, and cards scrolled
//! off screen are already dropped.

use crate::app::navigator::ModalView;
use crate::ui::layout::{ModalLayout, Rect};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title and card count).
    pub header: HeaderInfo,

    /// Search bar contents. The bar is always drawn.
    pub search_bar: SearchBarInfo,

    /// Loading or error notice shown directly above the gallery.
    pub notice: Option<Notice>,

    /// Cards on screen, in gallery order.
    pub cards: Vec<CardItem>,

    /// Detail overlay, present while the modal is open.
    pub modal: Option<ModalInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// One gallery card placed on screen.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub rect: Rect,
    pub name: String,
    pub email: String,
    pub location: String,
    pub picture: String,

    /// Whether the keyboard cursor is on this card.
    pub is_selected: bool,

    /// Character ranges of `name` matched by the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Inline status shown above the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// First line, e.g. `"404 Not Found"`.
    pub headline: String,
    /// Second line; empty for progress notices.
    pub message: String,
    /// Error notices use the theme's error color.
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub focused: bool,
}

/// Detail overlay contents and placement.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub view: ModalView,
    pub layout: ModalLayout,
}
