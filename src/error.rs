use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no tracklist found in metadata")]
    EmptyTracklist,

    #[error("failed to receive response from {url} after {attempts} attempts")]
    MetadataUnavailable { url: String, attempts: u32 },

    #[error("{subject} has no artist")]
    MissingArtist { subject: String },

    #[error("invalid track duration {value:?} (expected MM:SS)")]
    InvalidDuration { value: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("malformed release metadata from {url}: {source}")]
    MalformedMetadata {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("input file does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
