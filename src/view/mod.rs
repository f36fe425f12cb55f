use std::io::{self, Write};

use crate::{
    messages::Locale,
    models::{Note, format_stored_time},
};

/// Rendering target for notes and status messages.
pub trait NoteView {
    /// Renders notes in the given order, or the "no notes" message when
    /// there are none.
    fn show_notes(&mut self, notes: &[Note]) -> io::Result<()>;

    fn show_message(&mut self, text: &str) -> io::Result<()>;
}

/// Line-oriented view over any writer, normally stdout.
pub struct ConsoleNoteView<W: Write> {
    out: W,
    locale: Locale,
}

impl<W: Write> ConsoleNoteView<W> {
    pub const fn new(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NoteView for ConsoleNoteView<W> {
    fn show_notes(&mut self, notes: &[Note]) -> io::Result<()> {
        if notes.is_empty() {
            writeln!(self.out, "{}", self.locale.no_notes())?;
        }
        for note in notes {
            writeln!(
                self.out,
                "{} - {}",
                format_stored_time(note.note_time()),
                note.description()
            )?;
        }
        self.out.flush()
    }

    fn show_message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// One call made against a `RecordingNoteView`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Notes(Vec<Note>),
    NoNotes,
    Message(String),
}

/// Captures every render call instead of drawing anything.
#[derive(Debug, Default)]
pub struct RecordingNoteView {
    events: Vec<ViewEvent>,
}

impl RecordingNoteView {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl NoteView for RecordingNoteView {
    fn show_notes(&mut self, notes: &[Note]) -> io::Result<()> {
        if notes.is_empty() {
            self.events.push(ViewEvent::NoNotes);
        } else {
            self.events.push(ViewEvent::Notes(notes.to_vec()));
        }
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> io::Result<()> {
        self.events.push(ViewEvent::Message(text.to_string()));
        Ok(())
    }
}
