//! Gallery card construction.
//!
//! Cards are built exactly once, when the directory arrives. Afterwards only
//! their `hidden` flag changes (see [`super::search`]); nothing re-reads the
//! employee list to rebuild them.

use crate::domain::Employee;

/// One rendered gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Position of the employee in the fetched list.
    pub index: usize,
    pub picture: String,
    /// Displayed name; the text the search filter matches against.
    pub name: String,
    pub email: String,
    /// `"City, State"`.
    pub location: String,
    /// Set by the search filter when the name does not match the query.
    pub hidden: bool,
}

/// Builds one visible card per employee, tagged with its list index.
///
/// # Examples
///
/// ```
/// use zroster::app::gallery;
/// use zroster::domain::employee::fixture;
///
/// let cards = gallery::render(&[fixture("anna", "lee"), fixture("bob", "jones")]);
/// assert_eq!(cards[1].index, 1);
/// assert_eq!(cards[1].name, "Bob Jones");
/// ```
#[must_use]
pub fn render(employees: &[Employee]) -> Vec<Card> {
    let _span = tracing::debug_span!("render_gallery", employees = employees.len()).entered();

    employees
        .iter()
        .enumerate()
        .map(|(index, employee)| Card {
            index,
            picture: employee.picture.large.clone(),
            name: employee.display_name(),
            email: employee.email.clone(),
            location: employee.city_state(),
            hidden: false,
        })
        .collect()
}

/// Returns the cards the search filter currently shows, in gallery order.
pub fn visible(cards: &[Card]) -> impl Iterator<Item = &Card> {
    cards.iter().filter(|card| !card.hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::fixture;

    #[test]
    fn one_card_per_employee_with_unique_indices() {
        let employees: Vec<Employee> = (0..12).map(|i| fixture(&format!("e{i}"), "smith")).collect();
        let cards = render(&employees);
        assert_eq!(cards.len(), 12);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.index, i);
            assert!(!card.hidden);
        }
    }

    #[test]
    fn card_shows_picture_email_and_location() {
        let cards = render(&[fixture("anna", "lee")]);
        let card = &cards[0];
        assert_eq!(card.email, "anna.lee@example.com");
        assert_eq!(card.location, "Springfield, Oregon");
        assert!(card.picture.starts_with("https://randomuser.me/"));
    }

    #[test]
    fn empty_list_renders_no_cards() {
        assert!(render(&[]).is_empty());
    }
}
