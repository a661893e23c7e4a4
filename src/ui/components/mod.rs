//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at positions taken from
//! [`crate::ui::layout`].
//!
//! # Components
//!
//! - [`header`]: Title bar with card count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`notice`]: Loading and error messages above the gallery
//! - [`gallery`]: Bordered employee cards
//! - [`modal`]: Detail overlay with close and prev/next buttons
//!
//! # Page Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Notice - 3 lines, when present]
//! [Card grid]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod gallery;
mod header;
mod modal;
mod notice;
mod search;

pub use modal::render_modal;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{CONTENT_TOP, SEARCH_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use gallery::render_card;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders everything except the modal overlay.
pub fn render_gallery_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, SEARCH_TOP);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    debug_assert_eq!(current_row, CONTENT_TOP);

    if let Some(notice) = &vm.notice {
        render_notice(current_row, notice, theme, cols);
    }

    for card in &vm.cards {
        render_card(card, theme);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
