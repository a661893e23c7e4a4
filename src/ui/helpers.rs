//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across UI components: cursor positioning,
//! width-aware truncation and match highlighting. All text measurements use
//! character counts, not byte lengths.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
///
/// # Example
///
/// ```rust
/// use zroster::ui::helpers::truncate;
///
/// assert_eq!(truncate("anna.lee@example.com", 10), "anna.lee@…");
/// assert_eq!(truncate("short", 10), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Prints `text` padded with spaces to exactly `width` characters.
///
/// Longer text is truncated with [`truncate`].
pub fn print_padded(text: &str, width: usize) {
    let shown = truncate(text, width);
    let len = shown.chars().count();
    print!("{shown}{}", " ".repeat(width.saturating_sub(len)));
}

/// Restricts match ranges of `text` to what [`truncate`] keeps at `width`.
///
/// When the text is cut, the trailing `…` is never part of a match.
#[must_use]
pub fn truncated_ranges(text: &str, ranges: &[(usize, usize)], width: usize) -> Vec<(usize, usize)> {
    if text.chars().count() <= width {
        return ranges.to_vec();
    }
    let limit = width.saturating_sub(1);
    ranges
        .iter()
        .filter(|(start, _)| *start < limit)
        .map(|&(start, end)| (start, end.min(limit)))
        .collect()
}

/// Renders text with highlighted character ranges for search matches.
///
/// Highlighted sections use match highlight colors unless the card is
/// selected, in which case the selection colors already set by the caller
/// stay in effect. Ranges past the end of `text` are clipped; use
/// [`truncated_ranges`] first when `text` came from [`truncate`].
///
/// After each highlight, `restore` is re-emitted so the caller's base
/// styling continues.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Zoë Ødegård", 5), "Zoë …");
        assert_eq!(truncate("Zoë", 3), "Zoë");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn ranges_stop_before_ellipsis() {
        let ranges = [(0, 2), (6, 10)];
        assert_eq!(truncated_ranges("Hannah Smith", &ranges, 8), vec![(0, 2), (6, 7)]);
        assert_eq!(truncated_ranges("Hannah Smith", &ranges, 7), vec![(0, 2)]);
        assert_eq!(truncated_ranges("Hannah Smith", &ranges, 12), ranges.to_vec());
        assert!(truncated_ranges("Hannah Smith", &ranges, 0).is_empty());
    }
}
