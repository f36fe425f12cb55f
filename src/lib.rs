//! Console scheduler for timestamped notes.
//!
//! The CLI loop in [`handlers::cli`] drives a [`SchedulerPresenter`], which
//! mutates and queries a [`NoteStore`] and renders through a [`NoteView`].

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod models;
pub mod repository;
pub mod service;
pub mod view;

pub use error::SchedulerError;
pub use messages::Locale;
pub use models::Note;
pub use repository::NoteStore;
pub use service::SchedulerPresenter;
pub use view::{ConsoleNoteView, NoteView, RecordingNoteView, ViewEvent};
