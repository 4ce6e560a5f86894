//! Error types for catalog loading and user input.
//!
//! The query pipeline itself never fails; these errors only surface at the
//! edges, when a catalog is read from disk or a command is parsed.

use crate::catalog::TempleId;
use std::path::PathBuf;

/// Load-time catalog integrity failures
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no temples")]
    Empty,
    #[error("duplicate temple id {0}")]
    DuplicateId(TempleId),
    #[error("temple {0} has an empty name")]
    MissingName(TempleId),
    #[error("temple {id} has invalid significance score {score}")]
    InvalidSignificance { id: TempleId, score: f64 },
}

/// Returned when a sort order string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected relevance, oldest, newest or significance)")]
pub struct ParseSortOrderError(pub String);

/// Invalid input in an interactive browse session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command ':{0}' (try :help)")]
    Unknown(String),
    #[error("':{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid temple id '{0}'")]
    InvalidId(String),
    #[error(transparent)]
    Sort(#[from] ParseSortOrderError),
}
