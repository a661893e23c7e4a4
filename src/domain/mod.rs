//! Domain layer for the zroster plugin.
//!
//! This module contains the directory record types and the crate-wide error
//! type, independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee record as delivered by the directory API

pub mod employee;
pub mod error;

pub use employee::Employee;
pub use error::{Result, RosterError};
