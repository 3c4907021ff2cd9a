//! Durable storage of the user-added influencer records.

use snafu::{OptionExt, ResultExt};
use tracing::instrument;

use crate::model::Influencer;

pub use backend::*;
pub use error::*;

mod backend;
mod error;

/// Key under which the user records are kept.
pub const STORAGE_KEY: &str = "userInfluencers";

/// A synchronous string key-value store, such as browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Saves and restores the user-added subset of the campaign records.
///
/// Seed records are filtered out on save and skipped on load; they are
/// always rebuilt from their fixed definition instead.
#[derive(Debug, Clone)]
pub struct PersistenceBridge<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Writes every non-seed record, returning how many were stored.
    #[instrument(skip_all)]
    pub fn save(&mut self, records: &[Influencer]) -> Result<usize, SaveError> {
        let user_records: Vec<&Influencer> =
            records.iter().filter(|record| !record.id.is_seed()).collect();

        let payload = serde_json::to_string(&user_records).context(SerializeSnafu)?;
        self.backend
            .set(STORAGE_KEY, payload)
            .context(WriteStoreSnafu { key: STORAGE_KEY })?;

        tracing::debug!(count = user_records.len(), "saved user records");
        Ok(user_records.len())
    }

    /// Reads the user records back.
    ///
    /// Posted dates are parsed from their stored text and `currentViews` is
    /// derived again from the videos rather than taken from the payload.
    #[instrument(skip_all)]
    pub fn load(&self) -> Result<Vec<Influencer>, LoadError> {
        let payload = self
            .backend
            .get(STORAGE_KEY)
            .context(ReadStoreSnafu { key: STORAGE_KEY })?
            .context(NotFoundSnafu { key: STORAGE_KEY })?;

        let records: Vec<Influencer> =
            serde_json::from_str(&payload).context(ParseSnafu { key: STORAGE_KEY })?;

        let (seeds, users): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|record| record.id.is_seed());
        if !seeds.is_empty() {
            tracing::warn!(count = seeds.len(), "ignoring stored records with seed ids");
        }

        tracing::debug!(count = users.len(), "loaded user records");
        Ok(users)
    }
}
