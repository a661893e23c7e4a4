//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the directory knows for the
//! lifetime of one plugin load: the fetched employee list, the cards built
//! from it, the search query and the modal position. The event handler gets
//! `&mut AppState`; the renderer gets `&AppState`.
//!
//! # State Components
//!
//! - **Employees**: fetched once, in API order; never mutated afterwards
//! - **Cards**: built once from the employees; the search filter only flips
//!   their `hidden` flag
//! - **Selection**: keyboard cursor over the *visible* cards (a slot)
//! - **Modal**: visibility plus the index and view last shown
//! - **Fetch status**: idle, pending, loaded or failed
//!
//! # Example
//!
//! ```rust
//! use zroster::app::AppState;
//! use zroster::domain::employee::fixture;
//! use zroster::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.load_directory(vec![fixture("anna", "lee")]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.cards.len(), 1);
//! ```

use super::gallery::{self, Card};
use super::modes::{InputMode, ModalState, SearchFocus};
use super::navigator::{self, Direction, ModalControl, ModalView};
use super::search::{self, SearchMode};
use crate::domain::{Employee, RosterError};
use crate::fetch::{DirectoryQuery, DEFAULT_API_URL};
use crate::ui::layout::{GalleryLayout, ModalLayout, CONTENT_TOP, NOTICE_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, FooterInfo, HeaderInfo, ModalInfo, Notice, SearchBarInfo, UIViewModel,
};

/// Subtitle shown under the status line when the directory cannot be loaded.
pub const FETCH_FAILURE_MESSAGE: &str =
    "There was a problem receiving the employee data. Please try again later.";

/// Progress of the one-shot directory fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Waiting for the `WebAccess` permission.
    #[default]
    Idle,
    /// Request issued, no response yet.
    Pending,
    /// Employees loaded and cards rendered.
    Loaded,
    /// Terminal failure; no cards will ever be shown.
    Failed(FetchFailure),
}

/// Inline error shown above the gallery after a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// `"<status> <reason>"` for HTTP errors, a short description otherwise.
    pub headline: String,
    pub message: String,
}

impl From<&RosterError> for FetchFailure {
    fn from(err: &RosterError) -> Self {
        let headline = match err {
            RosterError::Http { status, reason } => format!("{status} {reason}"),
            RosterError::Decode(_) => "Invalid response".to_string(),
            RosterError::PermissionDenied => "Web access denied".to_string(),
            other => other.to_string(),
        };
        Self {
            headline,
            message: FETCH_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A gallery card, by employee index.
    Card(usize),
    /// A button inside the open modal.
    Control(ModalControl),
    /// Anything else, including the gallery background.
    Background,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched employees in API order. Indices into this list identify cards
    /// and the modal.
    pub employees: Vec<Employee>,

    /// Cards rendered from `employees`, one per employee, same order.
    pub cards: Vec<Card>,

    pub fetch_status: FetchStatus,

    /// Full URL of the directory request.
    pub directory_url: String,

    /// Cursor position among visible cards.
    ///
    /// Clamped by `apply_search_filter()`; wraps during navigation.
    pub selected_slot: usize,

    pub input_mode: InputMode,

    /// Current search query, matched against card names.
    pub search_query: String,

    pub search_mode: SearchMode,

    pub modal: ModalState,

    /// Index of the employee the modal shows (or showed before closing).
    pub modal_index: Option<usize>,

    /// View rendered for `modal_index`.
    pub modal_view: Option<ModalView>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state that will fetch from the default endpoint.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            employees: vec![],
            cards: vec![],
            fetch_status: FetchStatus::Idle,
            directory_url: DirectoryQuery::default().url(DEFAULT_API_URL),
            selected_slot: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            search_mode: SearchMode::default(),
            modal: ModalState::Hidden,
            modal_index: None,
            modal_view: None,
            theme,
        }
    }

    /// Stores the fetched employees and renders their cards.
    ///
    /// Only the first call has an effect; cards are appended once per load.
    pub fn load_directory(&mut self, employees: Vec<Employee>) {
        if !self.cards.is_empty() || matches!(self.fetch_status, FetchStatus::Loaded) {
            tracing::debug!("directory already loaded, ignoring");
            return;
        }

        tracing::info!(employees = employees.len(), "directory loaded");
        self.cards = gallery::render(&employees);
        self.employees = employees;
        self.fetch_status = FetchStatus::Loaded;
        self.apply_search_filter();
    }

    /// Records a terminal fetch failure. The employee list stays empty.
    pub fn fail_directory(&mut self, err: &RosterError) {
        tracing::error!(error = %err, "directory fetch failed");
        self.fetch_status = FetchStatus::Failed(FetchFailure::from(err));
    }

    /// Number of cards the search filter currently shows.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        gallery::visible(&self.cards).count()
    }

    /// Visible card at `slot`.
    #[must_use]
    pub fn card_in_slot(&self, slot: usize) -> Option<&Card> {
        gallery::visible(&self.cards).nth(slot)
    }

    /// Card under the keyboard cursor, if any card is visible.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.card_in_slot(self.selected_slot)
    }

    /// Moves the cursor one visible card forward or back, wrapping at the ends.
    ///
    /// No-op if no card is visible.
    pub fn move_selection(&mut self, direction: Direction) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        self.selected_slot = navigator::wrap_index(self.selected_slot.min(count - 1), count, direction);
    }

    /// Re-runs the search filter over the rendered cards and clamps the cursor.
    pub fn apply_search_filter(&mut self) {
        let shown = search::apply(&mut self.cards, &self.search_query, self.search_mode);
        self.selected_slot = self.selected_slot.min(shown.saturating_sub(1));
    }

    /// Returns `true` while the detail modal is shown.
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Opens the modal on the employee at `index`.
    ///
    /// Returns `false` if `index` does not name an employee.
    pub fn open_modal(&mut self, index: usize) -> bool {
        let Some(view) = navigator::open(&self.employees, index) else {
            tracing::debug!(index, "no employee at index");
            return false;
        };
        self.modal_index = Some(index);
        self.modal_view = Some(view);
        self.modal = ModalState::Open;
        true
    }

    /// Moves the open modal one employee in `direction`, wrapping at the ends.
    ///
    /// Returns `false` if the modal is hidden or the list is empty.
    pub fn navigate_modal(&mut self, direction: Direction) -> bool {
        if self.modal != ModalState::Open {
            return false;
        }
        let current = self.modal_index.unwrap_or(0);
        let Some((index, view)) = navigator::advance(&self.employees, current, direction) else {
            return false;
        };
        self.modal_index = Some(index);
        self.modal_view = Some(view);
        true
    }

    /// Hides the modal, keeping the last index and view.
    ///
    /// Returns `false` if it was already hidden.
    pub fn close_modal(&mut self) -> bool {
        let was_open = self.modal == ModalState::Open;
        self.modal = ModalState::Hidden;
        was_open
    }

    /// Resolves a click at the 1-indexed cell `(row, col)` in a pane of
    /// `rows` x `cols`.
    ///
    /// While the modal is open only its buttons are clickable; buttons are
    /// identified by the label drawn on them.
    #[must_use]
    pub fn click_target(&self, rows: usize, cols: usize, row: usize, col: usize) -> ClickTarget {
        if self.modal == ModalState::Open {
            return ModalLayout::compute(rows, cols)
                .label_at(row, col)
                .and_then(ModalControl::from_label)
                .map_or(ClickTarget::Background, ClickTarget::Control);
        }

        let layout = self.gallery_layout(rows, cols);
        layout
            .slot_at(row, col, self.visible_count())
            .and_then(|slot| self.card_in_slot(slot))
            .map_or(ClickTarget::Background, |card| ClickTarget::Card(card.index))
    }

    fn gallery_layout(&self, rows: usize, cols: usize) -> GalleryLayout {
        let top = if self.notice().is_some() {
            CONTENT_TOP + NOTICE_HEIGHT
        } else {
            CONTENT_TOP
        };
        GalleryLayout::compute(rows, cols, top, self.selected_slot)
    }

    /// Computes a renderable UI view model from current state and pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = self.gallery_layout(rows, cols);
        let total = self.visible_count();
        let range = layout.on_screen(total);
        let highlight = !self.search_query.is_empty();

        let cards = gallery::visible(&self.cards)
            .enumerate()
            .skip(range.start)
            .take(range.len())
            .filter_map(|(slot, card)| {
                let rect = layout.slot_rect(slot)?;
                Some(CardItem {
                    rect,
                    name: card.name.clone(),
                    email: card.email.clone(),
                    location: card.location.clone(),
                    picture: card.picture.clone(),
                    is_selected: slot == self.selected_slot && self.modal == ModalState::Hidden,
                    highlight_ranges: if highlight {
                        search::highlight_ranges(&card.name, &self.search_query, self.search_mode)
                    } else {
                        vec![]
                    },
                })
            })
            .collect();

        let modal = match (self.modal, &self.modal_view) {
            (ModalState::Open, Some(view)) => Some(ModalInfo {
                view: view.clone(),
                layout: ModalLayout::compute(rows, cols),
            }),
            _ => None,
        };

        UIViewModel {
            header: self.compute_header(total),
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
                focused: self.input_mode == InputMode::Search(SearchFocus::Typing),
            },
            notice: self.notice(),
            cards,
            modal,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        let title = if self.search_query.is_empty() || self.cards.is_empty() {
            format!(" Employee Directory ({}) ", self.cards.len())
        } else {
            format!(" Employee Directory ({visible} of {}) ", self.cards.len())
        };
        HeaderInfo { title }
    }

    fn notice(&self) -> Option<Notice> {
        match &self.fetch_status {
            FetchStatus::Idle => Some(Notice {
                headline: "Waiting for web access permission".to_string(),
                message: String::new(),
                is_error: false,
            }),
            FetchStatus::Pending => Some(Notice {
                headline: "Loading employees...".to_string(),
                message: String::new(),
                is_error: false,
            }),
            FetchStatus::Failed(failure) => Some(Notice {
                headline: failure.headline.clone(),
                message: failure.message.clone(),
                is_error: true,
            }),
            FetchStatus::Loaded => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal == ModalState::Open {
            "h/Left: prev  l/Right: next  Esc/x: close"
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "Type to filter  Enter: search  Esc: clear"
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "j/k: select  Enter: open  /: edit query  Esc: clear"
                }
                InputMode::Normal => "j/k: select  Enter: open  /: search  q: quit",
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::fixture;

    fn loaded(names: &[(&str, &str)]) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.load_directory(names.iter().map(|(f, l)| fixture(f, l)).collect());
        state
    }

    #[test]
    fn load_renders_one_card_per_employee() {
        let state = loaded(&[("anna", "lee"), ("bob", "jones")]);
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.fetch_status, FetchStatus::Loaded);
        assert!(state.compute_viewmodel(40, 120).notice.is_none());
    }

    #[test]
    fn second_load_is_ignored() {
        let mut state = loaded(&[("anna", "lee")]);
        state.load_directory(vec![fixture("bob", "jones"), fixture("cy", "young")]);
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.employees.len(), 1);
    }

    #[test]
    fn failure_shows_notice_and_no_cards() {
        let mut state = AppState::new(Theme::default());
        state.fail_directory(&RosterError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        });
        let vm = state.compute_viewmodel(40, 120);
        let notice = vm.notice.unwrap();
        assert!(notice.is_error);
        assert_eq!(notice.headline, "404 Not Found");
        assert_eq!(notice.message, FETCH_FAILURE_MESSAGE);
        assert!(vm.cards.is_empty());
    }

    #[test]
    fn selection_wraps_over_visible_cards() {
        let mut state = loaded(&[("anna", "lee"), ("hannah", "smith"), ("bob", "jones")]);
        state.search_query = "ann".to_string();
        state.apply_search_filter();
        assert_eq!(state.visible_count(), 2);

        state.move_selection(Direction::Prev);
        assert_eq!(state.selected_card().map(|c| c.index), Some(1));
        state.move_selection(Direction::Next);
        assert_eq!(state.selected_card().map(|c| c.index), Some(0));
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = loaded(&[("anna", "lee"), ("hannah", "smith"), ("bob", "jones")]);
        state.selected_slot = 2;
        state.search_query = "lee".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_slot, 0);
        assert_eq!(state.selected_card().map(|c| c.index), Some(0));
    }

    #[test]
    fn modal_close_keeps_last_index() {
        let mut state = loaded(&[("anna", "lee"), ("bob", "jones")]);
        assert!(state.open_modal(1));
        assert!(state.close_modal());
        assert_eq!(state.modal, ModalState::Hidden);
        assert_eq!(state.modal_index, Some(1));
        assert!(state.modal_view.is_some());
        assert!(!state.close_modal());
    }

    #[test]
    fn navigation_requires_open_modal() {
        let mut state = loaded(&[("anna", "lee"), ("bob", "jones")]);
        assert!(!state.navigate_modal(Direction::Next));
        state.open_modal(0);
        assert!(state.navigate_modal(Direction::Prev));
        assert_eq!(state.modal_index, Some(1));
    }

    #[test]
    fn opening_out_of_range_index_is_refused() {
        let mut state = AppState::new(Theme::default());
        assert!(!state.open_modal(0));
        assert_eq!(state.modal, ModalState::Hidden);
    }

    #[test]
    fn click_on_card_resolves_employee_index() {
        let mut state = loaded(&[("anna", "lee"), ("hannah", "smith"), ("bob", "jones")]);
        state.search_query = "o".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.cards.len(), 1);
        let rect = vm.cards[0].rect;
        assert_eq!(state.click_target(40, 120, rect.row + 1, rect.col + 1), ClickTarget::Card(2));
        assert_eq!(state.click_target(40, 120, 1, 1), ClickTarget::Background);
    }

    #[test]
    fn click_while_modal_open_only_hits_buttons() {
        let mut state = loaded(&[("anna", "lee")]);
        state.open_modal(0);
        let vm = state.compute_viewmodel(30, 100);
        let modal = vm.modal.unwrap();
        let (close_rect, _) = modal.layout.controls[0];
        assert_eq!(
            state.click_target(30, 100, close_rect.row, close_rect.col),
            ClickTarget::Control(ModalControl::Close)
        );
        assert_eq!(state.click_target(30, 100, 1, 1), ClickTarget::Background);
    }

    #[test]
    fn header_counts_matches_while_searching() {
        let mut state = loaded(&[("anna", "lee"), ("bob", "jones")]);
        assert_eq!(state.compute_viewmodel(24, 80).header.title, " Employee Directory (2) ");
        state.search_query = "bob".to_string();
        state.apply_search_filter();
        assert_eq!(state.compute_viewmodel(24, 80).header.title, " Employee Directory (1 of 2) ");
    }
}
