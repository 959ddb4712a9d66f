/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without time zone (PostgreSQL `DATE`).
pub type CalendarDate = chrono::NaiveDate;
