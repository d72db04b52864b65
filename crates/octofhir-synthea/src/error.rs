use std::path::PathBuf;

/// Faults that abort an upload run.
///
/// A non-2xx response from the server is not an error; it is reported
/// alongside the file name like any other status.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to list directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read bundle {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send {file} to the FHIR server")]
    Request {
        file: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to write upload report")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UploadError>;
