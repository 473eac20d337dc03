use thiserror::Error;

/// Everything that can go wrong between a user action and the database.
///
/// Validation and not-found failures are recoverable and turn into a
/// status-line message; `Sqlite` means the storage itself misbehaved and
/// the attempted operation is abandoned (the app keeps running).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A recipe must have a title before it can be saved
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The referenced recipe no longer exists (e.g. deleted meanwhile)
    #[error("recipe {0} no longer exists")]
    NotFound(i64),

    /// Underlying SQLite failure (file unavailable, disk full, ...)
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
