//! End-to-end flows through the public event API: fetch, gallery, search and
//! the detail modal, without a Zellij host.

use std::collections::BTreeMap;

use zroster::app::{ClickTarget, FetchStatus, ModalState};
use zroster::domain::employee::fixture;
use zroster::fetch::FetchRequest;
use zroster::{handle_event, initialize, Action, AppState, Config, Event};

const ROWS: usize = 40;
const COLS: usize = 120;

const NAMES: [(&str, &str); 12] = [
    ("anna", "lee"),
    ("bob", "jones"),
    ("carla", "diaz"),
    ("dev", "patel"),
    ("erin", "walsh"),
    ("felix", "ng"),
    ("grace", "kim"),
    ("hannah", "smith"),
    ("ivan", "petrov"),
    ("jade", "moss"),
    ("kofi", "mensah"),
    ("lena", "fischer"),
];

fn request_directory(state: &mut AppState) -> FetchRequest {
    let (_, actions) = handle_event(state, &Event::PermissionsResult { granted: true }).unwrap();
    match actions.as_slice() {
        [Action::FetchDirectory(request)] => request.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn deliver(state: &mut AppState, status: u16, body: Vec<u8>, context: BTreeMap<String, String>) {
    handle_event(
        state,
        &Event::DirectoryResult {
            status,
            body,
            context,
        },
    )
    .unwrap();
}

fn loaded_directory() -> AppState {
    let mut state = initialize(&Config::default());
    let request = request_directory(&mut state);
    let results: Vec<_> = NAMES.iter().map(|(f, l)| fixture(f, l)).collect();
    let body = serde_json::to_vec(&serde_json::json!({ "results": results })).unwrap();
    deliver(&mut state, 200, body, request.context);
    state
}

fn click_card(state: &mut AppState, index: usize) {
    let vm = state.compute_viewmodel(ROWS, COLS);
    let card = vm
        .cards
        .iter()
        .find(|card| card.name == state.cards[index].name)
        .expect("card on screen");
    let (row, col) = (card.rect.row + 2, card.rect.col + 3);
    assert_eq!(state.click_target(ROWS, COLS, row, col), ClickTarget::Card(index));

    handle_event(
        state,
        &Event::Click {
            row,
            col,
            rows: ROWS,
            cols: COLS,
        },
    )
    .unwrap();
}

fn click_control(state: &mut AppState, label: &str) {
    let vm = state.compute_viewmodel(ROWS, COLS);
    let modal = vm.modal.expect("modal open");
    let (rect, _) = modal
        .layout
        .controls
        .iter()
        .find(|(_, l)| *l == label)
        .copied()
        .expect("control present");

    handle_event(
        state,
        &Event::Click {
            row: rect.row,
            col: rect.col + 1,
            rows: ROWS,
            cols: COLS,
        },
    )
    .unwrap();
}

#[test]
fn fetch_uses_configured_directory_url() {
    let mut state = initialize(&Config::default());
    let request = request_directory(&mut state);
    assert_eq!(
        request.url,
        "https://randomuser.me/api/?results=12&inc=name,picture,email,location,cell,dob&noinfo&nat=US"
    );
    assert!(FetchRequest::is_directory_context(&request.context));
}

#[test]
fn twelve_records_render_twelve_indexed_cards() {
    let state = loaded_directory();
    assert_eq!(state.fetch_status, FetchStatus::Loaded);
    assert_eq!(state.cards.len(), 12);
    for (i, card) in state.cards.iter().enumerate() {
        assert_eq!(card.index, i);
    }
    assert_eq!(state.compute_viewmodel(ROWS, COLS).cards.len(), 12);
}

#[test]
fn modal_navigation_scenario() {
    let mut state = loaded_directory();

    click_card(&mut state, 5);
    assert_eq!(state.modal, ModalState::Open);
    assert_eq!(state.modal_index, Some(5));
    assert_eq!(state.modal_view.as_ref().unwrap().name, "Felix Ng");

    click_control(&mut state, "Next");
    assert_eq!(state.modal_index, Some(6));

    click_control(&mut state, "Prev");
    click_control(&mut state, "Prev");
    assert_eq!(state.modal_index, Some(4));
    assert_eq!(state.modal_view.as_ref().unwrap().name, "Erin Walsh");

    click_control(&mut state, "X");
    assert_eq!(state.modal, ModalState::Hidden);
    assert_eq!(state.modal_index, Some(4));
}

#[test]
fn modal_wraps_at_both_ends() {
    let mut state = loaded_directory();

    click_card(&mut state, 0);
    handle_event(&mut state, &Event::ModalPrev).unwrap();
    assert_eq!(state.modal_index, Some(11));
    handle_event(&mut state, &Event::ModalNext).unwrap();
    assert_eq!(state.modal_index, Some(0));
}

#[test]
fn modal_shows_full_details() {
    let mut state = loaded_directory();
    click_card(&mut state, 0);

    let view = state.modal_view.clone().unwrap();
    assert_eq!(view.email, "anna.lee@example.com");
    assert_eq!(view.city, "Springfield");
    assert_eq!(view.cell, "(555) 010-2030");
    assert_eq!(view.address, "4821 Lakeview Dr., springfield, oregon 97477");
    assert_eq!(view.birthday, "03/09/87");
}

#[test]
fn search_hides_non_matching_cards() {
    let mut state = loaded_directory();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "ANN".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    let shown: Vec<_> = state
        .compute_viewmodel(ROWS, COLS)
        .cards
        .into_iter()
        .map(|card| card.name)
        .collect();
    assert_eq!(shown, vec!["Anna Lee", "Hannah Smith"]);
    assert_eq!(state.employees.len(), 12);

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.compute_viewmodel(ROWS, COLS).cards.len(), 12);
}

#[test]
fn filtered_card_opens_its_own_employee() {
    let mut state = loaded_directory();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "smith".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    click_card(&mut state, 7);
    assert_eq!(state.modal_index, Some(7));
}

#[test]
fn http_error_shows_notice_and_no_cards() {
    let mut state = initialize(&Config::default());
    let request = request_directory(&mut state);
    deliver(&mut state, 404, Vec::new(), request.context);

    let vm = state.compute_viewmodel(ROWS, COLS);
    let notice = vm.notice.expect("error notice");
    assert!(notice.is_error);
    assert_eq!(notice.headline, "404 Not Found");
    assert_eq!(
        notice.message,
        "There was a problem receiving the employee data. Please try again later."
    );
    assert!(vm.cards.is_empty());
    assert!(state.employees.is_empty());
}

#[test]
fn late_duplicate_result_does_not_append_cards() {
    let mut state = loaded_directory();
    let body = serde_json::to_vec(&serde_json::json!({ "results": [fixture("zed", "zane")] })).unwrap();
    deliver(&mut state, 200, body, FetchRequest::new(String::new()).context);
    assert_eq!(state.cards.len(), 12);
}
