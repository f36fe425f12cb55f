use chrono::{NaiveDate, NaiveDateTime};

use std::path::Path;

use crate::{
    error::SchedulerError, messages::Locale, models::Note, repository::NoteStore,
    view::NoteView,
};

/// Runs user intents against the store and reports the outcome through
/// the view. Holds no state of its own beyond the two collaborators.
pub struct SchedulerPresenter<V: NoteView> {
    store: NoteStore,
    view: V,
    locale: Locale,
}

impl<V: NoteView> SchedulerPresenter<V> {
    pub const fn new(store: NoteStore, view: V, locale: Locale) -> Self {
        Self {
            store,
            view,
            locale,
        }
    }

    pub const fn store(&self) -> &NoteStore {
        &self.store
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn into_parts(self) -> (NoteStore, V) {
        (self.store, self.view)
    }

    pub fn add_note(
        &mut self,
        description: &str,
        note_time: NaiveDateTime,
    ) -> Result<(), SchedulerError> {
        self.store.add(Note::new(description, note_time));
        self.view.show_message(self.locale.note_added())?;
        Ok(())
    }

    pub fn display_notes(&mut self) -> Result<(), SchedulerError> {
        self.view.show_notes(self.store.list())?;
        Ok(())
    }

    pub fn save_notes(&mut self, path: &Path) -> Result<(), SchedulerError> {
        self.store.save(path)?;
        self.view.show_message(&self.locale.notes_saved(path))?;
        Ok(())
    }

    pub fn load_notes(&mut self, path: &Path) -> Result<(), SchedulerError> {
        self.store.load(path)?;
        self.view.show_message(&self.locale.notes_loaded(path))?;
        Ok(())
    }

    pub fn sort_and_display_notes(&mut self) -> Result<(), SchedulerError> {
        self.store.sort();
        self.display_notes()
    }

    pub fn find_notes_by_date(&mut self, date: NaiveDate) -> Result<(), SchedulerError> {
        let notes = self.store.filter_by_day(date);
        self.view.show_notes(&notes)?;
        Ok(())
    }

    pub fn find_notes_by_week(&mut self, date: NaiveDate) -> Result<(), SchedulerError> {
        let notes = self.store.filter_by_week(date);
        self.view.show_notes(&notes)?;
        Ok(())
    }

    /// Reports a status line that did not come from a store operation.
    pub fn show_message(&mut self, text: &str) -> Result<(), SchedulerError> {
        self.view.show_message(text)?;
        Ok(())
    }
}
