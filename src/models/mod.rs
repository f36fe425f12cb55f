use chrono::{NaiveDate, NaiveDateTime, SubsecRound};

use crate::error::SchedulerError;

/// Format of `note_time` in saved files and of rendered note lines.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format the user types when adding a note. Seconds default to `00`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format of a bare calendar date used by day and week queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single timestamped text entry.
///
/// Immutable once built; the timestamp is kept at second precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    description: String,
    note_time: NaiveDateTime,
}

impl Note {
    pub fn new(description: impl Into<String>, note_time: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            note_time: note_time.trunc_subsecs(0),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn note_time(&self) -> NaiveDateTime {
        self.note_time
    }

    pub fn date(&self) -> NaiveDate {
        self.note_time.date()
    }
}

fn parse_with(value: &str, format: &str) -> Result<NaiveDateTime, SchedulerError> {
    NaiveDateTime::parse_from_str(value.trim(), format).map_err(|source| {
        SchedulerError::Timestamp {
            value: value.trim().to_string(),
            source,
        }
    })
}

/// Parses a `YYYY-MM-DD HH:MM` value typed at the prompt.
pub fn parse_input_time(value: &str) -> Result<NaiveDateTime, SchedulerError> {
    parse_with(value, INPUT_FORMAT)
}

/// Parses a persisted `YYYY-MM-DD HH:MM:SS` value.
pub fn parse_stored_time(value: &str) -> Result<NaiveDateTime, SchedulerError> {
    parse_with(value, STORAGE_FORMAT)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, SchedulerError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        SchedulerError::Timestamp {
            value: value.trim().to_string(),
            source,
        }
    })
}

pub fn format_stored_time(note_time: NaiveDateTime) -> String {
    note_time.format(STORAGE_FORMAT).to_string()
}
