use std::path::PathBuf;

use crate::item::ItemId;

/// Alias for `Result<T, StashError>`.
pub type StashResult<T> = Result<T, StashError>;

/// Errors that can occur when loading or validating a world snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StashError {
    /// The snapshot file could not be read or written.
    #[error("cannot access snapshot {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the world schema.
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Two items in the world share the same ID.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// A tile key could not be parsed as `"x,y"`.
    #[error("invalid tile coordinate: \"{0}\"")]
    InvalidTile(String),
}
