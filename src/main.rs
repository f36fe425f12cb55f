use std::io;

use note_scheduler::{
    ConsoleNoteView, NoteStore, SchedulerPresenter, config, handlers::cli, logging,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config
    let loaded = logging::with_bootstrap_logging(config::load_config)?;

    // Log setup
    logging::init_logging(&loaded.config.log_level);
    if let Some(path) = &loaded.source {
        tracing::info!("Loaded config from '{}'", path.display());
    }

    // Presenter wiring
    let locale = loaded.config.locale;
    let view = ConsoleNoteView::new(io::stdout(), locale);
    let mut presenter = SchedulerPresenter::new(NoteStore::new(), view, locale);

    tracing::info!("Scheduler started");

    cli::run(io::stdin().lock(), io::stdout(), &mut presenter)?;

    tracing::info!("Scheduler stopped");

    Ok(())
}
