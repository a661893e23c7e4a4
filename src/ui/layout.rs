//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both the renderer and the click handler derive positions from the same
//! layout structs, so a card or button is clickable exactly where it is
//! drawn. All coordinates are 1-indexed terminal cells.
//!
//! ```text
//! row 1        (blank)
//! row 2        header
//! row 3        border
//! rows 4-6     search bar
//! rows 7-9     error / loading notice (only while present)
//! rows 7..     card grid
//! rows-1       border
//! rows         footer
//! ```

use crate::app::navigator::ModalControl;

/// First row of the search bar.
pub const SEARCH_TOP: usize = 4;

/// First row below the search bar.
pub const CONTENT_TOP: usize = SEARCH_TOP + 3;

/// Rows taken by a notice (two text lines plus a spacer).
pub const NOTICE_HEIGHT: usize = 3;

/// Preferred card width including borders.
pub const CARD_WIDTH: usize = 36;

/// Card height including borders: name, email, location.
pub const CARD_HEIGHT: usize = 5;

const MIN_CARD_WIDTH: usize = 12;
const COL_GAP: usize = 2;
const ROW_GAP: usize = 1;
const MARGIN: usize = 2;

/// Rows reserved at the bottom for border and footer.
const FOOTER_ROWS: usize = 2;

/// Axis-aligned rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }
}

/// Placement of the card grid.
///
/// Cards are addressed by *slot*: their position among the currently visible
/// cards. The grid scrolls by whole rows so the selected slot stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    pub top: usize,
    pub left: usize,
    pub card_width: usize,
    pub columns: usize,
    /// Grid rows that fit between `top` and the footer.
    pub visible_rows: usize,
    /// First grid row on screen.
    pub first_row: usize,
}

impl GalleryLayout {
    /// Computes the grid for a pane of `rows` x `cols`, starting at `top`.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, top: usize, selected_slot: usize) -> Self {
        let usable_width = cols.saturating_sub(MARGIN * 2);
        let card_width = CARD_WIDTH.min(usable_width).max(MIN_CARD_WIDTH);
        let columns = ((usable_width + COL_GAP) / (card_width + COL_GAP)).max(1);

        let bottom = rows.saturating_sub(FOOTER_ROWS);
        let height = bottom.saturating_sub(top);
        let visible_rows = ((height + ROW_GAP) / (CARD_HEIGHT + ROW_GAP)).max(1);

        let selected_row = selected_slot / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        Self {
            top,
            left: MARGIN + 1,
            card_width,
            columns,
            visible_rows,
            first_row,
        }
    }

    /// Screen rectangle of `slot`, or `None` if it is scrolled off screen.
    #[must_use]
    pub fn slot_rect(&self, slot: usize) -> Option<Rect> {
        let grid_row = slot / self.columns;
        if grid_row < self.first_row || grid_row >= self.first_row + self.visible_rows {
            return None;
        }
        let grid_col = slot % self.columns;

        Some(Rect {
            row: self.top + (grid_row - self.first_row) * (CARD_HEIGHT + ROW_GAP),
            col: self.left + grid_col * (self.card_width + COL_GAP),
            width: self.card_width,
            height: CARD_HEIGHT,
        })
    }

    /// Range of slots drawn on screen, clipped to `total` visible cards.
    #[must_use]
    pub fn on_screen(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(total);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(total);
        start..end
    }

    /// Slot under the cell `(row, col)`, if that cell belongs to a card.
    ///
    /// Gaps between cards and the area after the last card are background.
    #[must_use]
    pub fn slot_at(&self, row: usize, col: usize, total: usize) -> Option<usize> {
        self.on_screen(total)
            .find(|&slot| self.slot_rect(slot).is_some_and(|rect| rect.contains(row, col)))
    }
}

/// Placement of the detail modal and its buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub frame: Rect,
    /// Buttons with the label each one displays.
    pub controls: Vec<(Rect, &'static str)>,
}

/// Modal height including borders.
pub const MODAL_HEIGHT: usize = 13;

/// Offset of the prev/next row from the modal's top border.
pub const MODAL_NAV_ROW: usize = 11;

const MODAL_MAX_WIDTH: usize = 64;

impl ModalLayout {
    /// Centers the modal in a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute(rows: usize, cols: usize) -> Self {
        let width = cols.saturating_sub(4).min(MODAL_MAX_WIDTH).max(MIN_CARD_WIDTH + 8);
        let left = cols.saturating_sub(width) / 2 + 1;
        let top = rows.saturating_sub(MODAL_HEIGHT) / 2 + 1;
        let frame = Rect {
            row: top,
            col: left,
            width,
            height: MODAL_HEIGHT,
        };

        let close = ModalControl::Close.label();
        let close_width = button_width(close);
        let close_rect = Rect {
            row: top + 1,
            col: (left + width).saturating_sub(close_width + 2),
            width: close_width,
            height: 1,
        };

        let prev = ModalControl::Prev.label();
        let next = ModalControl::Next.label();
        let nav_width = button_width(prev) + 2 + button_width(next);
        let nav_left = left + width.saturating_sub(nav_width) / 2;
        let prev_rect = Rect {
            row: top + MODAL_NAV_ROW,
            col: nav_left,
            width: button_width(prev),
            height: 1,
        };
        let next_rect = Rect {
            row: top + MODAL_NAV_ROW,
            col: nav_left + button_width(prev) + 2,
            width: button_width(next),
            height: 1,
        };

        Self {
            frame,
            controls: vec![(close_rect, close), (prev_rect, prev), (next_rect, next)],
        }
    }

    /// Label of the button under `(row, col)`.
    #[must_use]
    pub fn label_at(&self, row: usize, col: usize) -> Option<&'static str> {
        self.controls
            .iter()
            .find(|(rect, _)| rect.contains(row, col))
            .map(|(_, label)| *label)
    }
}

/// Width of a button drawn as `[ label ]`.
#[must_use]
pub fn button_width(label: &str) -> usize {
    label.chars().count() + 4
}
