use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    error::SchedulerError,
    messages::Locale,
    models::{parse_date, parse_input_time},
    service::SchedulerPresenter,
    view::NoteView,
};

/// Menu entries, numbered 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Save,
    Load,
    SortAndList,
    FindByDate,
    FindByWeek,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Save),
            "4" => Some(Self::Load),
            "5" => Some(Self::SortAndList),
            "6" => Some(Self::FindByDate),
            "7" => Some(Self::FindByWeek),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Prompt/answer plumbing over an input reader and the menu output.
struct Prompter<R, W> {
    input: R,
    out: W,
    locale: Locale,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn print_menu(&mut self) -> Result<(), SchedulerError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.locale.menu_header())?;
        for (number, item) in (1..).zip(self.locale.menu_items()) {
            writeln!(self.out, "{number}. {item}")?;
        }
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` once input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, SchedulerError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Runs the interactive menu until the user exits or input runs out.
///
/// A failing command is logged and reported through the presenter's
/// view; only a broken output stream ends the loop with an error.
pub fn run<R, W, V>(
    input: R,
    out: W,
    presenter: &mut SchedulerPresenter<V>,
) -> Result<(), SchedulerError>
where
    R: BufRead,
    W: Write,
    V: NoteView,
{
    let locale = presenter.locale();
    let mut prompter = Prompter { input, out, locale };

    loop {
        prompter.print_menu()?;

        let Some(answer) = prompter.ask(locale.prompt_command())? else {
            tracing::debug!("Input closed, leaving command loop");
            break;
        };

        let Some(command) = Command::parse(&answer) else {
            tracing::debug!("Rejected menu input '{}'", answer.trim());
            presenter.show_message(locale.invalid_command())?;
            continue;
        };

        match execute(command, &mut prompter, presenter) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(e @ SchedulerError::Output(_)) => return Err(e),
            Err(e) => {
                tracing::error!("Command {:?} failed: {e}", command);
                if matches!(e, SchedulerError::Timestamp { .. }) {
                    presenter.show_message(locale.invalid_date())?;
                }
                presenter.show_message(&format!("{}: {e}", locale.command_failed()))?;
            }
        }
    }

    Ok(())
}

fn execute<R, W, V>(
    command: Command,
    prompter: &mut Prompter<R, W>,
    presenter: &mut SchedulerPresenter<V>,
) -> Result<Flow, SchedulerError>
where
    R: BufRead,
    W: Write,
    V: NoteView,
{
    let locale = prompter.locale;

    match command {
        Command::Add => {
            let Some(description) = prompter.ask(locale.prompt_description())? else {
                return Ok(Flow::Stop);
            };
            let Some(raw_time) = prompter.ask(locale.prompt_date_time())? else {
                return Ok(Flow::Stop);
            };
            let note_time = parse_input_time(&raw_time)?;
            presenter.add_note(&description, note_time)?;
        }
        Command::List => presenter.display_notes()?,
        Command::Save => {
            let Some(file_name) = prompter.ask(locale.prompt_save_file())? else {
                return Ok(Flow::Stop);
            };
            presenter.save_notes(&PathBuf::from(file_name.trim()))?;
        }
        Command::Load => {
            let Some(file_name) = prompter.ask(locale.prompt_load_file())? else {
                return Ok(Flow::Stop);
            };
            presenter.load_notes(&PathBuf::from(file_name.trim()))?;
        }
        Command::SortAndList => presenter.sort_and_display_notes()?,
        Command::FindByDate => {
            let Some(raw_date) = prompter.ask(locale.prompt_date())? else {
                return Ok(Flow::Stop);
            };
            presenter.find_notes_by_date(parse_date(&raw_date)?)?;
        }
        Command::FindByWeek => {
            let Some(raw_date) = prompter.ask(locale.prompt_date())? else {
                return Ok(Flow::Stop);
            };
            presenter.find_notes_by_week(parse_date(&raw_date)?)?;
        }
        Command::Exit => {
            writeln!(prompter.out, "{}", locale.exiting())?;
            return Ok(Flow::Stop);
        }
    }

    Ok(Flow::Continue)
}
