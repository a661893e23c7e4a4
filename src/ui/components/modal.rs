//! Detail modal renderer.
//!
//! Draws the overlay over the gallery, clearing the cells it covers. Button
//! positions come from [`ModalLayout`](crate::ui::layout::ModalLayout), the
//! same struct the click handler hit-tests against.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Anna Lee                          [ X ]  │
//! │ anna.lee@example.com                     │
//! │ Springfield                              │
//! ├──────────────────────────────────────────┤
//! │ Cell      (555) 010-2030                 │
//! │ Address   4821 Lakeview Dr., springfi…   │
//! │ Birthday  03/09/87                       │
//! │ Photo     https://randomuser.me/api/…    │
//! │                                          │
//! ├──────────────────────────────────────────┤
//! │          [ Prev ]  [ Next ]              │
//! └──────────────────────────────────────────┘
//! ```

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::layout::{button_width, MODAL_NAV_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const LABEL_WIDTH: usize = 10;

/// Renders the modal and its buttons.
pub fn render_modal(modal: &ModalInfo, theme: &Theme) {
    let frame = modal.layout.frame;
    let view = &modal.view;
    let border = Theme::fg(&theme.colors.modal_border);
    let inner = frame.width.saturating_sub(4);
    let close_width = modal
        .layout
        .controls
        .first()
        .map_or(0, |(rect, _)| rect.width + 1);

    let line = |row: usize, fill: &dyn Fn()| {
        position_cursor(frame.row + row, frame.col);
        print!("{border}│{} ", Theme::reset());
        fill();
        print!(" {border}│{}", Theme::reset());
    };
    let rule = |row: usize, left: char, right: char| {
        position_cursor(frame.row + row, frame.col);
        print!(
            "{border}{left}{}{right}{}",
            "─".repeat(frame.width.saturating_sub(2)),
            Theme::reset()
        );
    };
    let field = |label: &str, value: &str| {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(label, LABEL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(value, inner.saturating_sub(LABEL_WIDTH));
        print!("{}", Theme::reset());
    };

    rule(0, '┌', '┐');
    line(1, &|| {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
        print_padded(&view.name, inner.saturating_sub(close_width));
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(close_width.min(inner)));
    });
    line(2, &|| {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(&view.email, inner);
        print!("{}", Theme::reset());
    });
    line(3, &|| {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(&view.city, inner);
        print!("{}", Theme::reset());
    });
    rule(4, '├', '┤');
    line(5, &|| field("Cell", &view.cell));
    line(6, &|| field("Address", &view.address));
    line(7, &|| field("Birthday", &view.birthday));
    line(8, &|| field("Photo", &view.picture));
    line(9, &|| print!("{}", " ".repeat(inner)));
    rule(MODAL_NAV_ROW - 1, '├', '┤');
    line(MODAL_NAV_ROW, &|| print!("{}", " ".repeat(inner)));
    rule(MODAL_NAV_ROW + 1, '└', '┘');

    for (rect, label) in &modal.layout.controls {
        position_cursor(rect.row, rect.col);
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.search_bar_border));
        print!("[ {label} ]");
        print!("{}", Theme::reset());
        debug_assert_eq!(rect.width, button_width(label));
    }
}
