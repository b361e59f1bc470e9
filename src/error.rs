use thiserror::Error;

/// Structural problems with a catalogue file. I/O and CSV parse failures are
/// carried as `anyhow` context on top of the underlying error instead.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("catalogue is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("catalogue needs a 'Year' or 'Publication Date' column")]
    MissingYearColumn,

    #[error("expected a top-level JSON array of records")]
    NotAnArray,

    #[error("row {0} is not a JSON object")]
    NotAnObject(usize),
}
