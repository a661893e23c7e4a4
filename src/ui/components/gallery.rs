//! Gallery card renderer.
//!
//! Draws one bordered card per visible employee at the rectangle computed by
//! [`GalleryLayout`](crate::ui::layout::GalleryLayout):
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │ Anna Lee                         │
//! │ anna.lee@example.com             │
//! │ Springfield, Oregon              │
//! └──────────────────────────────────┘
//! ```
//!
//! The card under the keyboard cursor gets a selection-colored border and
//! name line. Search matches in the name are highlighted.

use crate::ui::helpers::{self, position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Renders a single card at `card.rect`.
pub fn render_card(card: &CardItem, theme: &Theme) {
    let rect = card.rect;
    let inner = rect.width.saturating_sub(4);
    let border = if card.is_selected {
        Theme::fg(&theme.colors.selection_bg)
    } else {
        Theme::fg(&theme.colors.card_border)
    };

    position_cursor(rect.row, rect.col);
    print!("{border}┌{}┐{}", "─".repeat(rect.width.saturating_sub(2)), Theme::reset());

    position_cursor(rect.row + 1, rect.col);
    print!("{border}│{} ", Theme::reset());
    render_name(card, theme, inner);
    print!(" {border}│{}", Theme::reset());

    for (offset, line) in [(2, &card.email), (3, &card.location)] {
        position_cursor(rect.row + offset, rect.col);
        print!("{border}│{} ", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(line, inner);
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(rect.row + 4, rect.col);
    print!("{border}└{}┘{}", "─".repeat(rect.width.saturating_sub(2)), Theme::reset());
}

fn render_name(card: &CardItem, theme: &Theme, width: usize) {
    let base = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };

    let name = truncate(&card.name, width);
    let ranges = helpers::truncated_ranges(&card.name, &card.highlight_ranges, width);
    print!("{base}");
    helpers::render_highlighted_text(
        &name,
        &ranges,
        theme,
        card.is_selected,
        &base,
    );
    print!("{}", " ".repeat(width.saturating_sub(name.chars().count())));
    print!("{}", Theme::reset());
}
