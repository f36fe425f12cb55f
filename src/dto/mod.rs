use serde::{Deserialize, Serialize};

use crate::{
    error::SchedulerError,
    models::{Note, format_stored_time, parse_stored_time},
};

/// On-disk shape of a note inside the saved JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Free-form note text
    pub description: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub note_time: String,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            description: note.description().to_string(),
            note_time: format_stored_time(note.note_time()),
        }
    }
}

impl TryFrom<NoteRecord> for Note {
    type Error = SchedulerError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        let note_time = parse_stored_time(&record.note_time)?;
        Ok(Self::new(record.description, note_time))
    }
}
