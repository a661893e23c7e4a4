//! zroster: a Zellij plugin that browses a randomly generated employee directory.
//!
//! On load the plugin fetches twelve records from the randomuser.me API and
//! shows them as a card gallery with:
//! - A live, case-insensitive name filter
//! - A detail modal with prev/next navigation that wraps at both ends
//! - Mouse and keyboard control
//! - An inline error notice when the directory cannot be fetched

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, action dispatching               │
//! │  - Gallery, search filter, modal navigator          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Fetch Layer   │
//! │ (ui/)         │                     │ (fetch/)      │
//! │ - Rendering   │                     │ - Request URL │
//! │ - Layout      │                     │ - Response    │
//! │ - Theming     │                     │   decoding    │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Employee model, error types (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zroster.wasm" {
//!         results "12"
//!         nationality "US"
//!         search_mode "substring"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, build
//!    `AppState`, request the `WebAccess` permission
//! 2. **Permission Granted**: the handler emits a single
//!    [`Action::FetchDirectory`]
//! 3. **Web Request Result**: the response is decoded and the cards are
//!    rendered once; failures become an inline notice
//! 4. **Interaction**: search, card selection and the modal run
//!    synchronously on each event
//!
//! # Example
//!
//! ```rust
//! use zroster::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zroster::RosterError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with 24-bit color

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::search::SearchMode;
pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Employee, Result, RosterError};
pub use ui::Theme;

use fetch::{DirectoryQuery, DEFAULT_API_URL};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zroster.wasm" {
///     api_url "https://randomuser.me/api/"
///     results "24"
///     nationality "GB"
///     search_mode "fuzzy"
///     theme_file "~/.config/zellij/themes/office.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base endpoint of the directory API. Default: `https://randomuser.me/api/`
    pub api_url: String,

    /// Number of records requested. Default: 12
    pub results: u32,

    /// `nat` query parameter. Default: `US`
    pub nationality: String,

    /// How the search bar matches names. Default: substring.
    pub search_mode: SearchMode,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox `/host`.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let query = DirectoryQuery::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            results: query.results,
            nationality: query.nationality,
            search_mode: SearchMode::default(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, empty or unparsable values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zroster::{Config, SearchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("results".to_string(), "24".to_string());
    /// map.insert("search_mode".to_string(), "fuzzy".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.results, 24);
    /// assert_eq!(config.search_mode, SearchMode::Fuzzy);
    /// assert_eq!(config.nationality, "US");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let results = text("results")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.results);

        let search_mode = text("search_mode")
            .and_then(|s| SearchMode::from_config(&s))
            .unwrap_or(defaults.search_mode);

        Self {
            api_url: text("api_url").unwrap_or(defaults.api_url),
            results,
            nationality: text("nationality").unwrap_or(defaults.nationality),
            search_mode,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Full URL of the directory request.
    #[must_use]
    pub fn directory_url(&self) -> String {
        DirectoryQuery {
            results: self.results,
            nationality: self.nationality.clone(),
        }
        .url(&self.api_url)
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial `AppState` from configuration.
///
/// The state starts idle: nothing is fetched until the `WebAccess`
/// permission is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(?config, "initializing zroster plugin");

    let mut state = AppState::new(config.load_theme());
    state.directory_url = config.directory_url();
    state.search_mode = config.search_mode;
    state
}
