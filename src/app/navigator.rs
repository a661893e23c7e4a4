//! Modal navigator: detail view for one employee with prev/next wraparound.
//!
//! The navigator is stateless; [`AppState`](super::AppState) stores the current
//! index and the last rendered [`ModalView`]. Every navigation step rebuilds the
//! view synchronously from the employee list.

use crate::domain::Employee;

/// Direction of a prev/next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Buttons rendered inside the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Prev,
    Next,
    Close,
}

impl ModalControl {
    /// All controls in render order (close button first, then the nav row).
    pub const ALL: [Self; 3] = [Self::Close, Self::Prev, Self::Next];

    /// Button label as rendered.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prev => "Prev",
            Self::Next => "Next",
            Self::Close => "X",
        }
    }

    /// Identifies a control from its rendered label.
    ///
    /// The close button is recognised purely by its `X` label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.label() == label.trim())
    }
}

/// Fully formatted detail view of one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Position of the employee in the fetched list.
    pub index: usize,
    pub picture: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub cell: String,
    pub address: String,
    /// `MM/DD/YY`.
    pub birthday: String,
}

/// Steps `index` one position in `direction`, wrapping at both ends.
///
/// `len` must be non-zero.
///
/// # Examples
///
/// ```
/// use zroster::app::navigator::{wrap_index, Direction};
///
/// assert_eq!(wrap_index(0, 12, Direction::Prev), 11);
/// assert_eq!(wrap_index(11, 12, Direction::Next), 0);
/// assert_eq!(wrap_index(5, 12, Direction::Next), 6);
/// ```
#[must_use]
pub const fn wrap_index(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Prev => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
        Direction::Next => {
            if index + 1 > len - 1 {
                0
            } else {
                index + 1
            }
        }
    }
}

/// Builds the detail view for the employee at `index`.
///
/// Returns `None` if `index` is out of range (only possible with an empty list).
#[must_use]
pub fn open(employees: &[Employee], index: usize) -> Option<ModalView> {
    let employee = employees.get(index)?;
    tracing::debug!(index, name = %employee.display_name(), "opening detail view");

    Some(ModalView {
        index,
        picture: employee.picture.large.clone(),
        name: employee.display_name(),
        email: employee.email.clone(),
        city: employee.city(),
        cell: employee.cell.clone(),
        address: employee.address(),
        birthday: employee.birthday(),
    })
}

/// Moves from `index` one step in `direction` and renders the new view.
///
/// Returns `None` for an empty employee list.
#[must_use]
pub fn advance(
    employees: &[Employee],
    index: usize,
    direction: Direction,
) -> Option<(usize, ModalView)> {
    if employees.is_empty() {
        return None;
    }
    let next = wrap_index(index.min(employees.len() - 1), employees.len(), direction);
    tracing::trace!(from = index, to = next, ?direction, "modal navigation");
    open(employees, next).map(|view| (next, view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::fixture;

    fn staff(n: usize) -> Vec<Employee> {
        (0..n).map(|i| fixture(&format!("person{i}"), "doe")).collect()
    }

    #[test]
    fn prev_and_next_are_inverses() {
        let len = 12;
        for i in 0..len {
            let there = wrap_index(i, len, Direction::Prev);
            assert_eq!(wrap_index(there, len, Direction::Next), i);
            let back = wrap_index(i, len, Direction::Next);
            assert_eq!(wrap_index(back, len, Direction::Prev), i);
        }
    }

    #[test]
    fn wraps_at_both_boundaries() {
        let employees = staff(12);
        let (idx, view) = advance(&employees, 0, Direction::Prev).unwrap();
        assert_eq!(idx, 11);
        assert_eq!(view.index, 11);
        let (idx, _) = advance(&employees, 11, Direction::Next).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn single_employee_wraps_onto_itself() {
        let employees = staff(1);
        assert_eq!(advance(&employees, 0, Direction::Next).map(|(i, _)| i), Some(0));
        assert_eq!(advance(&employees, 0, Direction::Prev).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn empty_list_is_a_no_op() {
        assert!(open(&[], 0).is_none());
        assert!(advance(&[], 0, Direction::Next).is_none());
    }

    #[test]
    fn open_formats_every_detail_field() {
        let employees = vec![fixture("anna", "lee")];
        let view = open(&employees, 0).unwrap();
        assert_eq!(view.name, "Anna Lee");
        assert_eq!(view.email, "anna.lee@example.com");
        assert_eq!(view.city, "Springfield");
        assert_eq!(view.cell, "(555) 010-2030");
        assert_eq!(view.address, "4821 Lakeview Dr., springfield, oregon 97477");
        assert_eq!(view.birthday, "03/09/87");
    }

    #[test]
    fn close_control_is_found_by_label() {
        assert_eq!(ModalControl::from_label("X"), Some(ModalControl::Close));
        assert_eq!(ModalControl::from_label(" Next "), Some(ModalControl::Next));
        assert_eq!(ModalControl::from_label("Close"), None);
    }
}
