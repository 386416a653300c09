//! Puppy records and related display types.

use serde::{Deserialize, Serialize};

/// Unique puppy identifier
pub type PuppyId = u64;

/// A puppy's gender, with the glyph and accent color shown beside the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Glyph shown next to the puppy's name
    pub fn symbol(&self) -> &'static str {
        match self {
            Gender::Male => "\u{2642}",
            Gender::Female => "\u{2640}",
        }
    }

    /// Accent color for the glyph as `[r, g, b]`
    pub fn accent(&self) -> [u8; 3] {
        match self {
            Gender::Male => [0x64, 0xB5, 0xF6],
            Gender::Female => [0xF4, 0x8F, 0xB1],
        }
    }
}

/// An adoptable puppy. Records are immutable once the roster is built; the
/// application shares them as `Arc<Puppy>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puppy {
    /// Unique identifier
    pub id: PuppyId,
    /// Given name
    pub name: String,
    /// Breed description
    pub breed: String,
    /// Shelter location
    pub location: String,
    /// Age display string, e.g. "14 weeks"
    pub age: String,
    /// Coat color description
    pub coat: String,
    /// Gender
    pub gender: Gender,
    /// Portrait identifiers; validated to be non-empty, the first is the
    /// primary portrait
    pub images: Vec<String>,
    /// Adoption story
    pub story: String,
}

impl Puppy {
    /// The primary portrait identifier.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }
}
