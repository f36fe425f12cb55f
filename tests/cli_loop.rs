use note_scheduler::{
    Locale, NoteStore, RecordingNoteView, SchedulerPresenter, ViewEvent, handlers::cli,
};

use std::io::Cursor;

fn run_script(script: &str) -> (SchedulerPresenter<RecordingNoteView>, String) {
    let mut presenter =
        SchedulerPresenter::new(NoteStore::new(), RecordingNoteView::new(), Locale::En);
    let mut out = Vec::new();

    cli::run(Cursor::new(script.as_bytes()), &mut out, &mut presenter).unwrap();

    (presenter, String::from_utf8(out).unwrap())
}

#[test]
fn exit_prints_menu_once_and_stops() {
    let (presenter, out) = run_script("8\n2\n");

    assert_eq!(out.matches("Available commands:").count(), 1);
    assert!(out.contains("1. Add note"));
    assert!(out.contains("8. Exit"));
    assert!(out.trim_end().ends_with("Exiting."));
    assert!(presenter.view().events().is_empty());
}

#[test]
fn end_of_input_ends_loop() {
    let (presenter, out) = run_script("2\n");

    assert_eq!(out.matches("Enter command (1-8): ").count(), 2);
    assert_eq!(presenter.view().events(), &[ViewEvent::NoNotes]);
}

#[test]
fn invalid_command_reports_and_redisplays_menu() {
    let (presenter, out) = run_script("42\n\n8\n");

    assert_eq!(
        presenter.view().messages(),
        vec![
            "Invalid command. Please try again.",
            "Invalid command. Please try again."
        ]
    );
    assert_eq!(out.matches("Available commands:").count(), 3);
}

#[test]
fn add_uses_minute_input_and_keeps_description_verbatim() {
    let (presenter, _) = run_script("1\n  lunch with Ann \n2024-03-06 12:30\n8\n");

    let notes = presenter.store().list();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description(), "  lunch with Ann ");
    assert_eq!(
        notes[0].note_time().format("%Y-%m-%d %H:%M:%S").to_string(),
        "2024-03-06 12:30:00"
    );
}

#[test]
fn add_with_bad_date_reports_and_continues() {
    let (presenter, _) = run_script("1\nbroken\n06.03.2024 12:30\n2\n8\n");

    assert!(presenter.store().is_empty());
    let messages = presenter.view().messages();
    assert_eq!(messages[0], "Invalid date format.");
    assert!(messages[1].starts_with("Command failed"));
    assert_eq!(presenter.view().events().last(), Some(&ViewEvent::NoNotes));
}

#[test]
fn day_and_week_queries_are_routed() {
    let script = "1\nmonday\n2024-03-04 09:00\n\
                  1\nnext week\n2024-03-11 09:00\n\
                  6\n2024-03-04\n\
                  7\n2024-03-06\n\
                  8\n";
    let (presenter, _) = run_script(script);

    let shown: Vec<Vec<&str>> = presenter
        .view()
        .events()
        .iter()
        .filter_map(|event| match event {
            ViewEvent::Notes(notes) => Some(notes.iter().map(|n| n.description()).collect()),
            _ => None,
        })
        .collect();
    assert_eq!(shown, vec![vec!["monday"], vec!["monday"]]);
}

#[test]
fn save_sort_and_load_through_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    let path = path.to_str().unwrap();

    let script = format!(
        "1\nb\n2024-03-02 10:00\n1\na\n2024-03-01 10:00\n5\n3\n{path}\n4\n{path}\n8\n"
    );
    let (presenter, _) = run_script(&script);

    let descriptions: Vec<&str> = presenter
        .store()
        .list()
        .iter()
        .map(|n| n.description())
        .collect();
    assert_eq!(descriptions, vec!["a", "b"]);

    let messages = presenter.view().messages();
    assert!(messages.contains(&format!("Notes saved to file {path}.").as_str()));
    assert!(messages.contains(&format!("Notes loaded from file {path}.").as_str()));
}

#[test]
fn load_failure_is_reported_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let script = format!("4\n{}\n2\n8\n", missing.display());
    let (presenter, _) = run_script(&script);

    let messages = presenter.view().messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Command failed"));
    assert_eq!(presenter.view().events().last(), Some(&ViewEvent::NoNotes));
}

#[test]
fn invalid_utf8_input_does_not_end_loop() {
    let mut presenter =
        SchedulerPresenter::new(NoteStore::new(), RecordingNoteView::new(), Locale::En);
    let mut out = Vec::new();
    let script: &[u8] = b"1\ncaf\xe9\n2024-03-01 10:00\n\xff\n2\n8\n";

    cli::run(Cursor::new(script), &mut out, &mut presenter).unwrap();

    let notes = presenter.store().list();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description(), "caf\u{FFFD}");
    assert_eq!(
        presenter.view().messages(),
        vec!["Note added.", "Invalid command. Please try again."]
    );
    assert!(matches!(
        presenter.view().events().last(),
        Some(ViewEvent::Notes(shown)) if shown.len() == 1
    ));
    assert!(String::from_utf8(out).unwrap().trim_end().ends_with("Exiting."));
}
