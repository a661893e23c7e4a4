//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zroster library and
//! the Zellij plugin system. It maps Zellij events to library events, runs
//! the library's event handler, and executes the returned actions through
//! Zellij host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Permission**: Request `WebAccess`; the grant triggers the fetch
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → gallery, search or modal events depending on mode
//! - `Mouse(LeftClick)` → `Event::Click` with 1-indexed coordinates
//! - `WebRequestResult` → `Event::DirectoryResult`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Next card
//! - `Ctrl+p`: Previous card
//!
//! In normal mode:
//! - `j`/`Down`/`l`/`Right`: Next card
//! - `k`/`Up`/`h`/`Left`: Previous card
//! - `Enter`: Open the selected card
//! - `/`: Enter search mode
//! - `q`: Hide the plugin pane
//!
//! In search mode:
//! - Typing: edit the query (filters live)
//! - `Enter`: Submit the query, then open the selected card
//! - `Esc`: Exit search and show every card
//! - `/`: Return to the search input
//!
//! With the modal open:
//! - `h`/`Left`: Previous employee
//! - `l`/`Right`: Next employee
//! - `Esc`/`x`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zroster::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the last pane size, which mouse
/// hit-testing needs and Zellij only reports to `render`.
struct State {
    /// Core application state from library layer.
    app: zroster::AppState,

    rows: usize,
    cols: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zroster::initialize(&Config::default()),
            rows: 0,
            cols: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state and tracing, requests the
    /// `WebAccess` permission and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zroster::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(?config, "parsed configuration");
        self.app = zroster::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, col)) => {
                let Ok(line) = usize::try_from(line) else {
                    return false;
                };
                Event::Click {
                    row: line + 1,
                    col: col + 1,
                    rows: self.rows,
                    cols: self.cols,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::DirectoryResult {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        zroster::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.modal_open() {
            return match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Some(Event::ModalPrev),
                BareKey::Right | BareKey::Char('l') => Some(Event::ModalNext),
                BareKey::Esc | BareKey::Char('x' | 'q') => Some(Event::ModalClose),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = self.app.input_mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down | BareKey::Right => Event::KeyDown,
            BareKey::Up | BareKey::Left => Event::KeyUp,
            BareKey::Char(c @ ('j' | 'l')) => {
                if typing {
                    Event::Char(c)
                } else {
                    Event::KeyDown
                }
            }
            BareKey::Char(c @ ('k' | 'h')) => {
                if typing {
                    Event::Char(c)
                } else {
                    Event::KeyUp
                }
            }
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter if typing => Event::SubmitSearch,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(SearchFocus::Navigating) => Event::FocusSearchBar,
                InputMode::Search(SearchFocus::Typing) => Event::Char('/'),
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Executes an action returned from event handling via Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchDirectory(request) => {
                tracing::info!(url = %request.url, "issuing directory request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context.clone(),
                );
            }
        }
    }
}
