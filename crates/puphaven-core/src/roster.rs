//! The embedded demo roster.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::puppy::{Puppy, PuppyId};

/// Errors raised while loading or validating roster data.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The RON document failed to parse
    #[error("Failed to parse roster data: {0}")]
    Parse(String),

    /// Two puppies share the same id
    #[error("Duplicate puppy id: {0}")]
    DuplicateId(PuppyId),

    /// A puppy has no portrait identifiers
    #[error("Puppy '{0}' has no images")]
    NoImages(String),

    /// The roster contains no puppies
    #[error("Roster is empty")]
    Empty,
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

const DEMO_ROSTER: &str = include_str!("../data/roster.ron");

/// On-disk shape of a roster document.
#[derive(Debug, Serialize, Deserialize)]
struct RosterFile {
    puppies: Vec<Puppy>,
}

/// The static collection of adoptable puppies shown by the app.
///
/// Puppies are handed out as `Arc<Puppy>` in a stable order. Records never
/// change after the roster is built.
#[derive(Debug, Clone)]
pub struct Roster {
    puppies: Vec<Arc<Puppy>>,
}

impl Roster {
    /// Load and validate the embedded demo roster.
    pub fn demo() -> Result<Self> {
        Self::from_ron(DEMO_ROSTER)
    }

    /// Parse and validate a roster from a RON document.
    pub fn from_ron(data: &str) -> Result<Self> {
        let file: RosterFile =
            ron::from_str(data).map_err(|e| RosterError::Parse(e.to_string()))?;
        Self::from_puppies(file.puppies)
    }

    /// Validate a list of puppies and build a roster from it.
    pub fn from_puppies(puppies: Vec<Puppy>) -> Result<Self> {
        if puppies.is_empty() {
            return Err(RosterError::Empty);
        }
        let mut seen = HashSet::new();
        for puppy in &puppies {
            if !seen.insert(puppy.id) {
                return Err(RosterError::DuplicateId(puppy.id));
            }
            if puppy.images.is_empty() {
                return Err(RosterError::NoImages(puppy.name.clone()));
            }
        }
        info!(count = puppies.len(), "roster loaded");
        Ok(Self {
            puppies: puppies.into_iter().map(Arc::new).collect(),
        })
    }

    /// All puppies in presentation order.
    pub fn puppies(&self) -> &[Arc<Puppy>] {
        &self.puppies
    }

    /// Look up a puppy by id.
    pub fn get(&self, id: PuppyId) -> Option<&Arc<Puppy>> {
        self.puppies.iter().find(|p| p.id == id)
    }

    /// Number of puppies.
    pub fn len(&self) -> usize {
        self.puppies.len()
    }

    /// Whether the roster holds no puppies. Validation rejects empty input,
    /// so any successfully built roster reports `false`.
    pub fn is_empty(&self) -> bool {
        self.puppies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puppy::Gender;

    fn minimal_puppy(id: PuppyId, name: &str) -> Puppy {
        Puppy {
            id,
            name: name.to_string(),
            breed: "Mixed".to_string(),
            location: "Portland, OR".to_string(),
            age: "10 weeks".to_string(),
            coat: "Brown".to_string(),
            gender: Gender::Male,
            images: vec![format!("{name}_portrait")],
            story: String::new(),
        }
    }

    #[test]
    fn test_demo_roster_loads_and_validates() {
        let roster = Roster::demo().unwrap();
        assert!(!roster.is_empty());
        let mut ids = HashSet::new();
        for puppy in roster.puppies() {
            assert!(ids.insert(puppy.id));
            assert!(!puppy.images.is_empty());
            assert!(!puppy.name.is_empty());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let roster = Roster::demo().unwrap();
        let first = roster.puppies()[0].clone();
        assert_eq!(roster.get(first.id), Some(&first));
        assert!(roster.get(u64::MAX).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result =
            Roster::from_puppies(vec![minimal_puppy(1, "Rex"), minimal_puppy(1, "Bo")]);
        assert!(matches!(result, Err(RosterError::DuplicateId(1))));
    }

    #[test]
    fn test_missing_images_are_rejected() {
        let mut puppy = minimal_puppy(1, "Rex");
        puppy.images.clear();
        let result = Roster::from_puppies(vec![puppy]);
        assert!(matches!(result, Err(RosterError::NoImages(_))));
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        assert!(matches!(
            Roster::from_puppies(Vec::new()),
            Err(RosterError::Empty)
        ));
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        assert!(matches!(
            Roster::from_ron("(puppies: [oops"),
            Err(RosterError::Parse(_))
        ));
    }
}
