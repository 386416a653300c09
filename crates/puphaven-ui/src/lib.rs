//! PupHaven UI - egui Views
//!
//! This crate provides the user interface layer, including:
//! - Home screen (puppy card grid)
//! - Detail screen (portrait, tinted info rows, adopt flow)
//! - Theme system
//! - Portrait texture and accent caching

#![warn(missing_docs)]

pub mod assets;
pub mod detail;
pub mod home;
pub mod theme;

pub use assets::{Accents, AssetCache};
pub use detail::DetailView;
pub use home::HomeView;
pub use theme::{Theme, ThemeConfig};

use puphaven_core::PuppyId;

/// UI actions produced by the views and applied by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIAction {
    /// Open the detail screen for a puppy
    OpenPuppy(PuppyId),
    /// Leave the detail screen
    GoBack,
    /// Toggle the adoption state for a puppy
    ToggleAdopt(PuppyId),
}
