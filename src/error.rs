use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("Failed to access file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed notes file '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid date/time '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Console I/O failed: {0}")]
    Output(#[from] std::io::Error),
}

impl SchedulerError {
    /// Malformed user input or malformed persisted data.
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Json { .. } | Self::Timestamp { .. })
    }

    /// Missing, unreadable or unwritable file, or a broken console stream.
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Output(_))
    }
}
