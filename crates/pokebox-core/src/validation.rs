// ── Box entry form validation ──
//
// Runs before any create/update call. A draft that fails here never
// reaches the network.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use pokebox_api::types::{InsertBoxEntry, UpdateBoxEntry};

use crate::model::{CatalogId, CollectionEntry};

pub const LOCATION_MAX_CHARS: usize = 100;
pub const NOTES_MAX_CHARS: usize = 400;
pub const LEVEL_MIN: i64 = 1;
pub const LEVEL_MAX: i64 = 100;

/// Raw form input as the user typed it.
///
/// `level` is signed and wide so out-of-range input reaches `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub location: String,
    pub level: i64,
    pub notes: Option<String>,
}

impl EntryDraft {
    pub fn new(location: impl Into<String>, level: i64) -> Self {
        Self {
            location: location.into(),
            level,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Pre-fill a draft from an existing entry (edit form).
    pub fn from_entry(entry: &CollectionEntry) -> Self {
        Self {
            location: entry.location.clone(),
            level: i64::from(entry.level),
            notes: entry.notes.clone(),
        }
    }

    /// Check every field and collect all violations at once.
    pub fn validate(&self) -> Result<ValidEntry, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let location = self.location.trim();
        if location.is_empty() {
            errors.location = Some("Location is required".into());
        } else if location.chars().count() > LOCATION_MAX_CHARS {
            errors.location = Some(format!(
                "Location must be {LOCATION_MAX_CHARS} characters or less"
            ));
        }

        let level = u8::try_from(self.level)
            .ok()
            .filter(|l| (LEVEL_MIN..=LEVEL_MAX).contains(&i64::from(*l)));
        if level.is_none() {
            errors.level = Some(format!(
                "Level must be between {LEVEL_MIN} and {LEVEL_MAX}"
            ));
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        if notes.is_some_and(|n| n.chars().count() > NOTES_MAX_CHARS) {
            errors.notes = Some(format!("Notes must be {NOTES_MAX_CHARS} characters or less"));
        }

        match level {
            Some(level) if errors.is_empty() => Ok(ValidEntry {
                location: location.to_owned(),
                level,
                notes: notes.map(str::to_owned),
            }),
            _ => Err(errors),
        }
    }
}

/// A draft that passed validation, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    location: String,
    level: u8,
    notes: Option<String>,
}

impl ValidEntry {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn into_insert(self, pokemon_id: CatalogId, created_at: DateTime<Utc>) -> InsertBoxEntry {
        InsertBoxEntry {
            pokemon_id: pokemon_id.get(),
            location: self.location,
            level: self.level,
            created_at,
            notes: self.notes,
        }
    }

    pub fn into_update(self) -> UpdateBoxEntry {
        UpdateBoxEntry {
            location: self.location,
            level: self.level,
            notes: self.notes,
        }
    }
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub location: Option<String>,
    pub level: Option<String>,
    pub notes: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.level.is_none() && self.notes.is_none()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        [&self.location, &self.level, &self.notes]
            .into_iter()
            .filter_map(|m| m.as_deref())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.messages().collect::<Vec<_>>().join("; ");
        f.write_str(&joined)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn level_bounds() {
        for level in [0, 101, -5, 300] {
            let errors = EntryDraft::new("Route 1", level).validate().unwrap_err();
            assert_eq!(errors.level.as_deref(), Some("Level must be between 1 and 100"));
            assert!(errors.location.is_none());
        }
        assert!(EntryDraft::new("Route 1", 1).validate().is_ok());
        assert!(EntryDraft::new("Route 1", 100).validate().is_ok());
    }

    #[test]
    fn location_required_after_trim() {
        let errors = EntryDraft::new("   ", 5).validate().unwrap_err();
        assert_eq!(errors.location.as_deref(), Some("Location is required"));
    }

    #[test]
    fn lengths_count_characters() {
        let exactly = "é".repeat(100);
        assert!(EntryDraft::new(exactly, 5).validate().is_ok());

        let errors = EntryDraft::new("x".repeat(101), 5).validate().unwrap_err();
        assert_eq!(
            errors.location.as_deref(),
            Some("Location must be 100 characters or less")
        );

        let errors = EntryDraft::new("Route 1", 5)
            .with_notes("n".repeat(401))
            .validate()
            .unwrap_err();
        assert_eq!(errors.notes.as_deref(), Some("Notes must be 400 characters or less"));
    }

    #[test]
    fn collects_every_violation() {
        let errors = EntryDraft::new("", 0)
            .with_notes("n".repeat(500))
            .validate()
            .unwrap_err();
        assert_eq!(errors.messages().count(), 3);
        assert_eq!(
            errors.to_string(),
            "Location is required; Level must be between 1 and 100; Notes must be 400 characters or less"
        );
    }

    #[test]
    fn valid_drafts_are_normalized() {
        let valid = EntryDraft::new("  Viridian Forest ", 7)
            .with_notes("   ")
            .validate()
            .unwrap();
        assert_eq!(valid.location(), "Viridian Forest");
        assert_eq!(valid.level(), 7);
        assert_eq!(valid.notes(), None);

        let update = EntryDraft::new("Cerulean", 9)
            .with_notes(" evolved ")
            .validate()
            .unwrap()
            .into_update();
        assert_eq!(update.notes.as_deref(), Some("evolved"));
    }
}
