//! Search filter over rendered gallery cards.
//!
//! The filter toggles [`Card::hidden`] by comparing the lowercased query with
//! each card's lowercased displayed name. It works purely on the cards that
//! were already rendered and never touches the employee list.

use super::gallery::Card;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// How a query is matched against card names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Skim-style fuzzy matching (characters in order, gaps allowed).
    Fuzzy,
}

impl SearchMode {
    /// Parses the `search_mode` configuration value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Shows cards whose name matches `query` and hides the rest.
///
/// An empty query shows every card. Returns the number of visible cards.
///
/// # Examples
///
/// ```
/// use zroster::app::{gallery, search::{self, SearchMode}};
/// use zroster::domain::employee::fixture;
///
/// let mut cards = gallery::render(&[fixture("anna", "lee"), fixture("bob", "jones")]);
/// assert_eq!(search::apply(&mut cards, "ANN", SearchMode::Substring), 1);
/// assert!(cards[1].hidden);
/// ```
pub fn apply(cards: &mut [Card], query: &str, mode: SearchMode) -> usize {
    let _span = tracing::debug_span!("apply_search_filter",
        cards = cards.len(),
        query_len = query.len(),
        mode = ?mode
    ).entered();

    let query = query.to_lowercase();
    let matcher = (mode == SearchMode::Fuzzy && !query.is_empty()).then(SkimMatcherV2::default);

    let mut shown = 0;
    for card in cards.iter_mut() {
        let name = card.name.to_lowercase();
        let matches = match &matcher {
            Some(m) => m.fuzzy_match(&name, &query).is_some(),
            None => name.contains(&query),
        };
        card.hidden = !matches;
        if matches {
            shown += 1;
        }
    }

    tracing::debug!(visible = shown, "search filter applied");
    shown
}

/// Character ranges of `name` matched by `query`, for highlighting.
///
/// Each tuple is `(start, end)` in character indices with exclusive end.
/// Returns an empty vector for an empty query or no match.
#[must_use]
pub fn highlight_ranges(name: &str, query: &str, mode: SearchMode) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    match mode {
        SearchMode::Substring => substring_range(name, query).into_iter().collect(),
        SearchMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            matcher
                .fuzzy_indices(&name.to_lowercase(), &query.to_lowercase())
                .map_or_else(Vec::new, |(_score, indices)| coalesce(&indices))
        }
    }
}

/// Finds the first case-insensitive occurrence of `query` in `name`.
fn substring_range(name: &str, query: &str) -> Option<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = name.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

/// Merges consecutive indices into `(start, end)` runs.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gallery;
    use crate::domain::employee::fixture;

    fn cards() -> Vec<Card> {
        gallery::render(&[
            fixture("anna", "lee"),
            fixture("hannah", "smith"),
            fixture("bob", "jones"),
        ])
    }

    fn hidden(cards: &[Card]) -> Vec<bool> {
        cards.iter().map(|c| c.hidden).collect()
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let mut cards = cards();
        assert_eq!(apply(&mut cards, "ann", SearchMode::Substring), 2);
        assert_eq!(hidden(&cards), vec![false, false, true]);

        assert_eq!(apply(&mut cards, "JONES", SearchMode::Substring), 1);
        assert_eq!(hidden(&cards), vec![true, true, false]);
    }

    #[test]
    fn empty_query_shows_every_card() {
        let mut cards = cards();
        apply(&mut cards, "zzz", SearchMode::Substring);
        assert_eq!(hidden(&cards), vec![true, true, true]);

        assert_eq!(apply(&mut cards, "", SearchMode::Substring), 3);
        assert_eq!(hidden(&cards), vec![false, false, false]);
    }

    #[test]
    fn query_spans_first_and_last_name() {
        let mut cards = cards();
        assert_eq!(apply(&mut cards, "a l", SearchMode::Substring), 1);
        assert!(!cards[0].hidden);
    }

    #[test]
    fn fuzzy_mode_allows_gaps() {
        let mut cards = cards();
        assert_eq!(apply(&mut cards, "bjs", SearchMode::Substring), 0);
        assert_eq!(apply(&mut cards, "bjs", SearchMode::Fuzzy), 1);
        assert!(!cards[2].hidden);
    }

    #[test]
    fn substring_highlight_covers_match() {
        assert_eq!(highlight_ranges("Hannah Smith", "ANN", SearchMode::Substring), vec![(1, 4)]);
        assert!(highlight_ranges("Bob Jones", "ann", SearchMode::Substring).is_empty());
        assert!(highlight_ranges("Bob Jones", "", SearchMode::Substring).is_empty());
    }

    #[test]
    fn fuzzy_highlight_marks_each_matched_char() {
        assert_eq!(
            highlight_ranges("Bob Jones", "bjs", SearchMode::Fuzzy),
            vec![(0, 1), (4, 5), (8, 9)]
        );
        assert_eq!(highlight_ranges("Anna Lee", "ANN", SearchMode::Fuzzy), vec![(0, 3)]);
        assert!(highlight_ranges("Bob Jones", "", SearchMode::Fuzzy).is_empty());
        assert!(highlight_ranges("Bob Jones", "zzz", SearchMode::Fuzzy).is_empty());
    }

    #[test]
    fn coalesce_merges_runs() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }

    #[test]
    fn search_mode_parses_config_values() {
        assert_eq!(SearchMode::from_config("Fuzzy"), Some(SearchMode::Fuzzy));
        assert_eq!(SearchMode::from_config(" substring "), Some(SearchMode::Substring));
        assert_eq!(SearchMode::from_config("regex"), None);
    }
}
