use serde::{Deserialize, Serialize};

use std::path::Path;

/// Language of every user-facing string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const fn menu_header(self) -> &'static str {
        match self {
            Self::En => "Available commands:",
            Self::Ru => "Доступные команды:",
        }
    }

    /// Menu entries, in command order 1..=8.
    pub const fn menu_items(self) -> [&'static str; 8] {
        match self {
            Self::En => [
                "Add note",
                "Show all notes",
                "Save notes to file",
                "Load notes from file",
                "Sort and show notes",
                "Find notes by date",
                "Find notes for the week",
                "Exit",
            ],
            Self::Ru => [
                "Добавить запись",
                "Показать все записи",
                "Сохранить записи в файл",
                "Загрузить записи из файла",
                "Сортировать и показать записи",
                "Найти записи по дате",
                "Найти записи за неделю",
                "Выйти",
            ],
        }
    }

    pub const fn prompt_command(self) -> &'static str {
        match self {
            Self::En => "Enter command (1-8): ",
            Self::Ru => "Введите команду (1-8): ",
        }
    }

    pub const fn prompt_description(self) -> &'static str {
        match self {
            Self::En => "Enter description: ",
            Self::Ru => "Введите описание: ",
        }
    }

    pub const fn prompt_date_time(self) -> &'static str {
        match self {
            Self::En => "Enter date and time (YYYY-MM-DD HH:MM): ",
            Self::Ru => "Введите дату и время (в формате ГГГГ-ММ-ДД ЧЧ:ММ): ",
        }
    }

    pub const fn prompt_date(self) -> &'static str {
        match self {
            Self::En => "Enter date (YYYY-MM-DD): ",
            Self::Ru => "Введите дату (в формате ГГГГ-ММ-ДД): ",
        }
    }

    pub const fn prompt_save_file(self) -> &'static str {
        match self {
            Self::En => "Enter file name to save to: ",
            Self::Ru => "Введите имя файла для сохранения: ",
        }
    }

    pub const fn prompt_load_file(self) -> &'static str {
        match self {
            Self::En => "Enter file name to load from: ",
            Self::Ru => "Введите имя файла для загрузки: ",
        }
    }

    pub const fn note_added(self) -> &'static str {
        match self {
            Self::En => "Note added.",
            Self::Ru => "Запись добавлена.",
        }
    }

    pub fn notes_saved(self, path: &Path) -> String {
        match self {
            Self::En => format!("Notes saved to file {}.", path.display()),
            Self::Ru => format!("Записи сохранены в файл {}.", path.display()),
        }
    }

    pub fn notes_loaded(self, path: &Path) -> String {
        match self {
            Self::En => format!("Notes loaded from file {}.", path.display()),
            Self::Ru => format!("Записи загружены из файла {}.", path.display()),
        }
    }

    pub const fn no_notes(self) -> &'static str {
        match self {
            Self::En => "No notes.",
            Self::Ru => "Нет записей.",
        }
    }

    pub const fn invalid_command(self) -> &'static str {
        match self {
            Self::En => "Invalid command. Please try again.",
            Self::Ru => "Неверная команда. Попробуйте снова.",
        }
    }

    pub const fn invalid_date(self) -> &'static str {
        match self {
            Self::En => "Invalid date format.",
            Self::Ru => "Неверный формат даты.",
        }
    }

    pub const fn command_failed(self) -> &'static str {
        match self {
            Self::En => "Command failed",
            Self::Ru => "Ошибка выполнения команды",
        }
    }

    pub const fn exiting(self) -> &'static str {
        match self {
            Self::En => "Exiting.",
            Self::Ru => "Выход из программы.",
        }
    }
}
