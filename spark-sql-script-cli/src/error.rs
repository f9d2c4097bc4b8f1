use std::path::PathBuf;

/// Failures of the process-backed SQL shell driver.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("spark-class was not found in any of these locations: {search_path:?}")]
    NotFound { search_path: Vec<PathBuf> },

    #[error("Failed to start driver via {}", .program.display())]
    Unavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for driver process")]
    Wait {
        #[source]
        source: std::io::Error,
    },
}
