//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and host events, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (already mapped from Zellij events)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Gallery**: `KeyDown`, `KeyUp`, `OpenSelected`, `Click`
//! - **Modal**: `ModalPrev`, `ModalNext`, `ModalClose`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `SubmitSearch`, `ExitSearch`,
//!   `Char`, `Backspace`, `Escape`
//! - **System**: `PermissionsResult`, `DirectoryResult`
//!
//! # Example
//!
//! ```rust
//! use zroster::app::{handle_event, AppState, Event};
//! use zroster::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zroster::RosterError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::navigator::{Direction, ModalControl};
use super::state::{ClickTarget, FetchStatus};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, RosterError};
use crate::fetch::{parse_response, FetchRequest};
use std::collections::BTreeMap;

/// Events triggered by user input or host callbacks.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the gallery cursor to the next visible card (wraps to first).
    KeyDown,
    /// Moves the gallery cursor to the previous visible card (wraps to last).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens the detail modal on the card under the cursor.
    OpenSelected,

    /// Left click at the 1-indexed cell `(row, col)` of a `rows` x `cols` pane.
    Click {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Shows the previous employee in the open modal.
    ModalPrev,
    /// Shows the next employee in the open modal.
    ModalNext,
    /// Hides the modal.
    ModalClose,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Submits the query and moves focus to the filtered cards.
    SubmitSearch,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Outcome of the `WebAccess` permission request.
    ///
    /// A grant issues the directory fetch; a denial is a terminal failure.
    PermissionsResult {
        granted: bool,
    },

    /// A `WebRequestResult` delivered by the host.
    DirectoryResult {
        status: u16,
        body: Vec<u8>,
        /// Context map echoed back from the request.
        context: BTreeMap<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the pane should re-render and the actions to run, in
/// order. The action list is empty for pure state changes.
///
/// # Errors
///
/// Currently infallible: fetch failures are absorbed into
/// [`FetchStatus::Failed`] instead of being propagated.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
///
/// # Example
///
/// ```rust
/// use zroster::app::{handle_event, AppState, Event};
/// use zroster::ui::Theme;
///
/// let mut state = AppState::new(Theme::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::CloseFocus)?;
/// assert!(!should_render);
/// assert_eq!(actions, vec![zroster::app::Action::CloseFocus]);
/// # Ok::<(), zroster::RosterError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection(Direction::Next);
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection(Direction::Prev);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenSelected => {
            let Some(index) = state.selected_card().map(|card| card.index) else {
                tracing::debug!("no card selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    exit_search(state);
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };
            Ok((state.open_modal(index), vec![]))
        }
        Event::Click {
            row,
            col,
            rows,
            cols,
        } => match state.click_target(*rows, *cols, *row, *col) {
            ClickTarget::Card(index) => {
                tracing::debug!(index, "card clicked");
                Ok((state.open_modal(index), vec![]))
            }
            ClickTarget::Control(control) => {
                tracing::debug!(control = control.label(), "modal control clicked");
                let changed = match control {
                    ModalControl::Prev => state.navigate_modal(Direction::Prev),
                    ModalControl::Next => state.navigate_modal(Direction::Next),
                    ModalControl::Close => state.close_modal(),
                };
                Ok((changed, vec![]))
            }
            ClickTarget::Background => Ok((false, vec![])),
        },
        Event::ModalPrev => Ok((state.navigate_modal(Direction::Prev), vec![])),
        Event::ModalNext => Ok((state.navigate_modal(Direction::Next), vec![])),
        Event::ModalClose => Ok((state.close_modal(), vec![])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.apply_search_filter();

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            tracing::debug!(query = %state.search_query, visible = state.visible_count(), "search submitted");
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            exit_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if state.fetch_status != FetchStatus::Idle {
                tracing::debug!(status = ?state.fetch_status, "permission result after fetch started");
                return Ok((false, vec![]));
            }

            if !granted {
                state.fail_directory(&RosterError::PermissionDenied);
                return Ok((true, vec![]));
            }

            tracing::info!(url = %state.directory_url, "requesting employee directory");
            state.fetch_status = FetchStatus::Pending;
            let request = FetchRequest::new(state.directory_url.clone());
            Ok((true, vec![Action::FetchDirectory(request)]))
        }
        Event::DirectoryResult {
            status,
            body,
            context,
        } => {
            if !FetchRequest::is_directory_context(context) {
                tracing::debug!(?context, "ignoring unrelated web request result");
                return Ok((false, vec![]));
            }
            if state.fetch_status != FetchStatus::Pending {
                tracing::debug!(status = ?state.fetch_status, "ignoring duplicate directory result");
                return Ok((false, vec![]));
            }

            match parse_response(*status, body) {
                Ok(employees) => state.load_directory(employees),
                Err(e) => state.fail_directory(&e),
            }
            Ok((true, vec![]))
        }
    }
}

fn exit_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.search_query = String::new();
    state.apply_search_filter();
}

/// Short event name for span fields; avoids logging response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::CloseFocus => "CloseFocus",
        Event::OpenSelected => "OpenSelected",
        Event::Click { .. } => "Click",
        Event::ModalPrev => "ModalPrev",
        Event::ModalNext => "ModalNext",
        Event::ModalClose => "ModalClose",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::SubmitSearch => "SubmitSearch",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::DirectoryResult { .. } => "DirectoryResult",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::fixture;
    use crate::ui::Theme;

    fn directory_body(names: &[(&str, &str)]) -> Vec<u8> {
        let results: Vec<_> = names.iter().map(|(f, l)| fixture(f, l)).collect();
        serde_json::to_vec(&serde_json::json!({ "results": results })).unwrap()
    }

    fn directory_context() -> BTreeMap<String, String> {
        FetchRequest::new(String::new()).context
    }

    fn loaded(names: &[(&str, &str)]) -> AppState {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        handle_event(
            &mut state,
            &Event::DirectoryResult {
                status: 200,
                body: directory_body(names),
                context: directory_context(),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn permission_grant_issues_single_fetch() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(matches!(actions.as_slice(), [Action::FetchDirectory(req)] if req.url == state.directory_url));
        assert_eq!(state.fetch_status, FetchStatus::Pending);

        let (_, again) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn permission_denial_is_terminal() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(actions.is_empty());
        assert!(matches!(state.fetch_status, FetchStatus::Failed(_)));
    }

    #[test]
    fn unrelated_results_are_ignored() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::DirectoryResult {
                status: 200,
                body: directory_body(&[("anna", "lee")]),
                context: BTreeMap::new(),
            },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(state.fetch_status, FetchStatus::Pending);
    }

    #[test]
    fn malformed_body_fails_fetch() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        handle_event(
            &mut state,
            &Event::DirectoryResult {
                status: 200,
                body: b"<html>".to_vec(),
                context: directory_context(),
            },
        )
        .unwrap();
        assert!(matches!(state.fetch_status, FetchStatus::Failed(_)));
        assert!(state.cards.is_empty());
    }

    #[test]
    fn typing_filters_cards_live() {
        let mut state = loaded(&[("anna", "lee"), ("hannah", "smith"), ("bob", "jones")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "ANN".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.visible_count(), 2);

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Char('o')).unwrap();
        assert_eq!(state.search_query, "Ao");
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn characters_outside_typing_focus_are_ignored() {
        let mut state = loaded(&[("anna", "lee")]);
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn submit_then_open_selected_match() {
        let mut state = loaded(&[("anna", "lee"), ("hannah", "smith"), ("bob", "jones")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('b')).unwrap();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(state.modal_open());
        assert_eq!(state.modal_index, Some(2));
    }

    #[test]
    fn submitting_empty_query_returns_to_normal() {
        let mut state = loaded(&[("anna", "lee")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn exit_search_shows_every_card() {
        let mut state = loaded(&[("anna", "lee"), ("bob", "jones")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        assert_eq!(state.visible_count(), 0);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn open_selected_with_no_match_leaves_search() {
        let mut state = loaded(&[("anna", "lee")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.modal_open());
    }

    #[test]
    fn modal_keys_navigate_and_close() {
        let mut state = loaded(&[("anna", "lee"), ("bob", "jones"), ("cy", "young")]);
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(state.modal_index, Some(0));

        handle_event(&mut state, &Event::ModalPrev).unwrap();
        assert_eq!(state.modal_index, Some(2));
        handle_event(&mut state, &Event::ModalNext).unwrap();
        assert_eq!(state.modal_index, Some(0));

        let (render, _) = handle_event(&mut state, &Event::ModalClose).unwrap();
        assert!(render);
        assert!(!state.modal_open());
        let (render, _) = handle_event(&mut state, &Event::ModalNext).unwrap();
        assert!(!render);
    }

    #[test]
    fn background_click_is_ignored() {
        let mut state = loaded(&[("anna", "lee")]);
        let (render, actions) = handle_event(
            &mut state,
            &Event::Click {
                row: 1,
                col: 1,
                rows: 40,
                cols: 120,
            },
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.modal_open());
    }
}
