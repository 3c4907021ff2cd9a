//! The campaign records and the operations the dashboard drives them with.

use snafu::{ensure, OptionExt};
use tracing::instrument;

use crate::filter::StatusFilter;
use crate::model::{
    seed_records, CampaignStats, Influencer, InfluencerId, InfluencerPatch, NewInfluencer, Status,
};
use crate::notice::Notice;
use crate::persistence::{KeyValueStore, LoadError, PersistenceBridge};

pub use error::*;
pub use id::*;

mod error;
mod id;

/// In-memory campaign state with save-on-mutate persistence.
///
/// Records keep insertion order, seeds first. Every mutating operation writes
/// the user records back to the backing store before returning.
#[derive(Debug)]
pub struct CampaignStore<S> {
    records: Vec<Influencer>,
    filter: StatusFilter,
    ids: IdAllocator,
    persistence: PersistenceBridge<S>,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore> CampaignStore<S> {
    /// Builds the seed records and merges in whatever user records `backend` holds.
    ///
    /// A missing, unreadable or corrupt payload leaves the store with the seeds only.
    #[instrument(skip_all)]
    pub fn initialize(backend: S) -> Self {
        let persistence = PersistenceBridge::new(backend);
        let mut records = seed_records();

        match persistence.load() {
            Ok(restored) => {
                tracing::info!(count = restored.len(), "restored user records");
                records.extend(restored);
            }
            Err(err @ LoadError::NotFound { .. }) => {
                tracing::debug!("{err}, starting with the seed records");
            }
            Err(err @ LoadError::Parse { .. }) => {
                tracing::warn!(error = %err, "discarding stored user records");
            }
            Err(err @ LoadError::ReadStore { .. }) => {
                tracing::error!(error = %err, "could not read stored user records");
            }
        }

        let mut ids = IdAllocator::default();
        for record in &records {
            ids.observe(record.id);
        }

        Self {
            records,
            filter: StatusFilter::default(),
            ids,
            persistence,
            notices: Vec::new(),
        }
    }

    /// Registers a new influencer, unpaid, at the end of the list.
    #[instrument(skip_all, fields(username = %input.username))]
    pub fn add(&mut self, input: NewInfluencer) -> Result<&Influencer> {
        let status = validate(&input)?;

        let id = self.ids.next().context(IdsExhaustedSnafu)?;
        let influencer = Influencer::new(id, input, status);
        tracing::info!(id = %id, current_views = influencer.current_views(), "add influencer");

        self.notices.push(Notice::added(&influencer));
        self.records.push(influencer);
        self.persist();

        Ok(&self.records[self.records.len() - 1])
    }

    /// Merges `patch` into the record with the given id.
    ///
    /// Returns `None`, without touching the store, when no such record exists.
    #[instrument(skip(self))]
    pub fn update(&mut self, id: InfluencerId, patch: InfluencerPatch) -> Option<&Influencer> {
        let Some(index) = self.position(id) else {
            tracing::warn!(id = %id, "cannot update unknown influencer");
            return None;
        };

        patch.apply(&mut self.records[index]);
        self.persist();

        Some(&self.records[index])
    }

    /// Removes the record with the given id, keeping the order of the rest.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: InfluencerId) -> Option<Influencer> {
        let Some(index) = self.position(id) else {
            tracing::warn!(id = %id, "cannot remove unknown influencer");
            return None;
        };

        let removed = self.records.remove(index);
        tracing::info!(id = %id, username = %removed.username, "removed influencer");
        self.notices.push(Notice::removed(&removed));
        self.persist();

        Some(removed)
    }

    /// Flips the paid flag, returning the new value.
    #[instrument(skip(self))]
    pub fn toggle_paid(&mut self, id: InfluencerId) -> Option<bool> {
        let paid = !self.get(id)?.paid;
        let influencer = self.update(id, InfluencerPatch::paid(paid))?;

        let notice = Notice::paid_changed(influencer);
        self.notices.push(notice);
        Some(paid)
    }

    /// Replaces the active filter. An empty filter hides every record.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        tracing::debug!(filter = ?filter, "set status filter");
        self.filter = filter;
    }

    /// Flips a single status in the active filter, returning whether it is now visible.
    pub fn toggle_status(&mut self, status: Status) -> bool {
        self.filter.toggle(status)
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.filter
    }

    /// The records whose status is in the active filter, in list order.
    pub fn filtered_records(&self) -> Vec<&Influencer> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    pub fn aggregate_stats<'a>(records: impl IntoIterator<Item = &'a Influencer>) -> CampaignStats {
        CampaignStats::compute(records)
    }

    /// Totals over the currently visible records.
    pub fn visible_stats(&self) -> CampaignStats {
        Self::aggregate_stats(self.filtered_records())
    }

    pub fn get(&self, id: InfluencerId) -> Option<&Influencer> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[Influencer] {
        &self.records
    }

    /// Takes the notifications queued since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn backend(&self) -> &S {
        self.persistence.backend()
    }

    pub fn into_backend(self) -> S {
        self.persistence.into_backend()
    }

    fn position(&self, id: InfluencerId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn persist(&mut self) {
        if let Err(err) = self.persistence.save(&self.records) {
            tracing::error!(error = %err, "failed to persist user records");
        }
    }
}

fn validate(input: &NewInfluencer) -> Result<Status> {
    ensure!(!input.username.is_empty(), ValidationSnafu { field: "username" });
    ensure!(!input.profile_link.is_empty(), ValidationSnafu { field: "profileLink" });
    ensure!(!input.platform.is_empty(), ValidationSnafu { field: "platform" });
    ensure!(
        input.videos.checked_current_views().is_some(),
        ValidationSnafu { field: "videos" }
    );

    match input.status {
        Some(status) => Ok(status),
        None => ValidationSnafu { field: "status" }.fail(),
    }
}
