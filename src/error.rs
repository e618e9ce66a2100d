use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised at the puzzle-loading boundary.
///
/// An unsolvable puzzle is *not* an error: the solver reports it as `None`.
/// These variants only cover malformed or unreadable input and
/// serialization of results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("structure file is empty")]
    EmptyStructure,

    #[error("structure contains no word slots")]
    NoSlots,

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("failed to encode solution as JSON")]
    Json(#[from] serde_json::Error),
}
