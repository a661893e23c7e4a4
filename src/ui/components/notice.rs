//! Notice component renderer.
//!
//! Renders the loading, permission and fetch-error messages shown directly
//! above the gallery area.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Notice;

/// Renders a centered two-line notice starting at `row`.
///
/// ```text
/// [left padding] 404 Not Found [right padding]
/// [left padding] There was a problem ... [right padding]
/// ```
///
/// Error headlines use `error_fg` in bold; other notices use `notice_fg`.
/// The message line uses `text_dim`.
pub fn render_notice(row: usize, notice: &Notice, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    if notice.is_error {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.error_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.notice_fg));
    }
    print_centered(&notice.headline, cols);
    print!("{}", Theme::reset());

    if notice.message.is_empty() {
        return;
    }

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&notice.message, cols);
    print!("{}", Theme::reset());
}

fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}
