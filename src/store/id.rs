use crate::model::{InfluencerId, SEED_ID_MAX};

/// Hands out user record ids derived from the creation time in milliseconds.
///
/// Ids are strictly increasing: when the clock has not moved past the last id,
/// the next id is `last + 1`. Once `u64::MAX` has been handed out or observed,
/// no further ids are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Makes sure future ids are above `id`.
    pub fn observe(&mut self, id: InfluencerId) {
        self.last = self.last.max(id.get());
    }

    pub fn next(&mut self) -> Option<InfluencerId> {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    pub fn next_at(&mut self, now_millis: u64) -> Option<InfluencerId> {
        let id = now_millis
            .max(self.last.checked_add(1)?)
            .max(SEED_ID_MAX + 1);
        self.last = id;
        Some(InfluencerId::new(id))
    }
}
