//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/fetch layers. It implements the event-driven architecture that
//! powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └─────── Web Request Results ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`gallery`]: Card construction from fetched employees
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and modal visibility types
//! - [`navigator`]: Detail view with prev/next wraparound
//! - [`search`]: Name filter over rendered cards
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod gallery;
pub mod handler;
pub mod modes;
pub mod navigator;
pub mod search;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ModalState, SearchFocus};
pub use state::{AppState, ClickTarget, FetchFailure, FetchStatus};
