use std::io;
use std::path::PathBuf;

/// Failures while loading signatures or traffic rows.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open pattern file: {}", .path.display())]
    OpenPatterns {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No patterns loaded from {}", .0.display())]
    NoPatterns(PathBuf),

    #[error("Failed to open data file: {}", .path.display())]
    OpenData {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Data file appears empty: {}", .0.display())]
    EmptyData(PathBuf),

    #[error("No usable rows in {}", .0.display())]
    NoRows(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
