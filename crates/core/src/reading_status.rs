//! Reading-progress status of a book.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! `reading_statuses` lookup table. The wire representation is the Spanish
//! label, accents included.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadingStatus {
    Read = 1,
    #[default]
    Pending = 2,
    Reading = 3,
}

impl ReadingStatus {
    /// Every status, in the fixed order used by statistics output.
    pub const ALL: [ReadingStatus; 3] = [Self::Read, Self::Pending, Self::Reading];

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Look up a status by its database ID.
    pub fn from_id(id: StatusId) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Wire-level literal.
    pub fn label(self) -> &'static str {
        match self {
            Self::Read => "Leído",
            Self::Pending => "Pendiente",
            Self::Reading => "Leyendo",
        }
    }

    /// Parse a wire-level literal. Matching is exact.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == value)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{value}'. Must be one of: Leído, Pendiente, Leyendo"
                ))
            })
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReadingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ReadingStatus> for StatusId {
    fn from(value: ReadingStatus) -> Self {
        value as StatusId
    }
}

/// Used by `#[sqlx(try_from = "i16")]` when decoding rows.
impl TryFrom<StatusId> for ReadingStatus {
    type Error = CoreError;

    fn try_from(id: StatusId) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| CoreError::Internal(format!("Unknown status id {id}")))
    }
}

impl Serialize for ReadingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReadingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ids_match_seed_data() {
        assert_eq!(ReadingStatus::Read.id(), 1);
        assert_eq!(ReadingStatus::Pending.id(), 2);
        assert_eq!(ReadingStatus::Reading.id(), 3);
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(ReadingStatus::default(), ReadingStatus::Pending);
    }

    #[test]
    fn parse_accepts_exact_labels() {
        assert_eq!(ReadingStatus::parse("Leído").unwrap(), ReadingStatus::Read);
        assert_eq!(
            ReadingStatus::parse("Pendiente").unwrap(),
            ReadingStatus::Pending
        );
        assert_eq!(
            ReadingStatus::parse("Leyendo").unwrap(),
            ReadingStatus::Reading
        );
    }

    #[test]
    fn parse_rejects_unaccented_and_other_casing() {
        assert!(matches!(
            ReadingStatus::parse("Leido"),
            Err(CoreError::Validation(_))
        ));
        assert!(ReadingStatus::parse("pendiente").is_err());
        assert!(ReadingStatus::parse("Read").is_err());
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(ReadingStatus::from_id(0).is_none());
        assert!(ReadingStatus::try_from(4).is_err());
        assert_eq!(ReadingStatus::try_from(3).unwrap(), ReadingStatus::Reading);
    }

    #[test]
    fn serializes_as_wire_label() {
        let json = serde_json::to_string(&ReadingStatus::Read).unwrap();
        assert_eq!(json, "\"Leído\"");
        let back: ReadingStatus = serde_json::from_str("\"Leyendo\"").unwrap();
        assert_eq!(back, ReadingStatus::Reading);
        assert!(serde_json::from_str::<ReadingStatus>("\"Done\"").is_err());
    }
}
