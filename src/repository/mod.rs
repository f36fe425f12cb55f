use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use std::{fs, path::Path};

use crate::{dto::NoteRecord, error::SchedulerError, models::Note};

const JSON_INDENT: &[u8] = b"    ";

/// In-memory ordered collection of notes.
///
/// Insertion order is kept until `sort` is called. Notes are only ever
/// appended or reordered; `load` swaps the whole sequence at once.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    pub fn add(&mut self, note: Note) {
        tracing::debug!(
            "Adding note at {} ({} notes before)",
            note.note_time(),
            self.notes.len()
        );
        self.notes.push(note);
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Stable ascending sort by timestamp.
    pub fn sort(&mut self) {
        self.notes.sort_by_key(Note::note_time);
        tracing::debug!("Sorted {} notes by time", self.notes.len());
    }

    pub fn filter_by_day(&self, date: NaiveDate) -> Vec<Note> {
        let found: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.date() == date)
            .cloned()
            .collect();

        tracing::debug!("Found {} notes on {}", found.len(), date);
        found
    }

    /// Notes dated within the Monday..=Sunday week that contains `date`.
    pub fn filter_by_week(&self, date: NaiveDate) -> Vec<Note> {
        let (start, end) = week_bounds(date);
        let found: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| (start..=end).contains(&note.date()))
            .cloned()
            .collect();

        tracing::debug!("Found {} notes in week {} - {}", found.len(), start, end);
        found
    }

    /// Writes every note to `path` as a pretty-printed JSON array,
    /// replacing any existing file.
    ///
    /// The document is rendered in memory first, so any failure while
    /// touching the file is reported as an I/O error.
    pub fn save(&self, path: &Path) -> Result<(), SchedulerError> {
        let records: Vec<NoteRecord> = self.notes.iter().map(NoteRecord::from).collect();

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(JSON_INDENT),
        );
        records
            .serialize(&mut serializer)
            .map_err(|source| SchedulerError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        buf.push(b'\n');

        fs::write(path, &buf).map_err(|source| SchedulerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved {} notes to '{}'", records.len(), path.display());

        Ok(())
    }

    /// Replaces the in-memory notes with the contents of `path`.
    ///
    /// The file is fully parsed before anything is replaced, so a failed
    /// load leaves the current notes as they were.
    pub fn load(&mut self, path: &Path) -> Result<(), SchedulerError> {
        let contents = fs::read_to_string(path).map_err(|source| SchedulerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<NoteRecord> =
            serde_json::from_str(&contents).map_err(|source| SchedulerError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let notes = records
            .into_iter()
            .map(Note::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "Loaded {} notes from '{}', discarding {} in memory",
            notes.len(),
            path.display(),
            self.notes.len()
        );

        self.notes = notes;

        Ok(())
    }
}

/// First (Monday) and last (Sunday) day of the week containing `date`.
///
/// Near the ends of the supported calendar the bounds are clamped to
/// `NaiveDate::MIN` / `NaiveDate::MAX`; no date lies beyond them, so the
/// window still holds exactly the dates of that week.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let since_monday = date.weekday().num_days_from_monday();
    let start = date
        .checked_sub_days(Days::new(u64::from(since_monday)))
        .unwrap_or(NaiveDate::MIN);
    let end = date
        .checked_add_days(Days::new(u64::from(6 - since_monday)))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}
