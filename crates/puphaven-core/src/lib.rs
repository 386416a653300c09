//! PupHaven Core - Domain Model and Navigation State
//!
//! This crate contains the core domain model for PupHaven, including:
//! - Puppy records and the embedded demo roster
//! - Navigation state (home / detail) with change subscriptions
//! - Procedural portrait synthesis
//! - Application settings

#![warn(missing_docs)]

pub mod navigation;
pub mod portrait;
pub mod puppy;
pub mod roster;
pub mod settings;

// --- Re-exports grouped by category ---

// Data model
pub use puppy::{Gender, Puppy, PuppyId};
pub use roster::{Roster, RosterError};

// Navigation
pub use navigation::{NavState, Screen};

// Settings
pub use settings::AppSettings;
