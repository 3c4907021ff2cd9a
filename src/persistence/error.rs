use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T, E = StorageError> = std::result::Result<T, E>;

/// Failures of the key-value backend itself.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum StorageError {
    #[snafu(display("Failed to create the storage directory `{}`: {source}", path.display()))]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read the storage entry `{}`: {source}", path.display()))]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write the storage entry `{}`: {source}", path.display()))]
    WriteEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum LoadError {
    #[snafu(display("Nothing is stored under `{key}`"))]
    NotFound { key: String },
    #[snafu(display("The records stored under `{key}` are corrupt: {source}"))]
    Parse {
        key: String,
        source: serde_json::Error,
    },
    #[snafu(display("Failed to read the records stored under `{key}`: {source}"))]
    ReadStore { key: String, source: StorageError },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum SaveError {
    #[snafu(display("Failed to serialize the user records: {source}"))]
    Serialize { source: serde_json::Error },
    #[snafu(display("Failed to write the records under `{key}`: {source}"))]
    WriteStore { key: String, source: StorageError },
}
