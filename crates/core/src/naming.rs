//! Name handling for entities whose name is their natural key.

use crate::error::CoreError;

/// Entities that are looked up (or lazily created) by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Genre,
}

impl EntityKind {
    /// Entity label used in errors and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Genre => "Genre",
        }
    }

    /// Whether a book must reference this entity.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Author)
    }
}

/// Trim a free-text name. Blank input becomes `None`.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize an optional free-text value (query parameter, form field).
pub fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_name)
}

/// Normalize a name for `kind`, rejecting blank input for required kinds.
///
/// Returns `Ok(None)` for a blank optional name ("no genre").
pub fn normalize_for(kind: EntityKind, raw: &str) -> Result<Option<String>, CoreError> {
    match normalize_name(raw) {
        Some(name) => Ok(Some(name)),
        None if kind.is_required() => Err(CoreError::Validation(format!(
            "{} name must not be empty",
            kind.label()
        ))),
        None => Ok(None),
    }
}
