use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Influencer, Status};

/// Set of statuses currently visible on the dashboard.
///
/// An empty filter shows nothing; "show all" is the full status set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusFilter(BTreeSet<Status>);

impl StatusFilter {
    pub fn all() -> Self {
        Self(Status::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, status: Status) -> bool {
        self.0.contains(&status)
    }

    pub fn matches(&self, influencer: &Influencer) -> bool {
        self.contains(influencer.status)
    }

    /// Flips a single status on or off, returning whether it is now visible.
    pub fn toggle(&mut self, status: Status) -> bool {
        if self.0.remove(&status) {
            false
        } else {
            self.0.insert(status)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.0.len() == Status::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.0.iter().copied()
    }

    /// Caption of the filter button, with the active count when partial.
    pub fn label(&self) -> String {
        if self.is_all() {
            "Filter".to_string()
        } else {
            format!("Filter ({}/{})", self.len(), Status::ALL.len())
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Status> for StatusFilter {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Status> for StatusFilter {
    fn extend<I: IntoIterator<Item = Status>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_everything() {
        let filter = StatusFilter::default();
        assert!(Status::ALL.into_iter().all(|status| filter.contains(status)));
        assert_eq!(filter.label(), "Filter");
    }

    #[test]
    fn empty_filter_shows_nothing() {
        let filter = StatusFilter::none();
        assert!(Status::ALL.into_iter().all(|status| !filter.contains(status)));
        assert_eq!(filter.label(), "Filter (0/5)");
    }

    #[test]
    fn toggling() {
        let mut filter = StatusFilter::all();
        assert!(!filter.toggle(Status::Posted), "posted should be hidden");
        assert!(!filter.contains(Status::Posted));
        assert_eq!(filter.label(), "Filter (4/5)");

        assert!(filter.toggle(Status::Posted), "posted should be visible again");
        assert!(filter.is_all());
    }

    #[test]
    fn duplicates_collapse() {
        let filter: StatusFilter = [Status::Posted, Status::Posted, Status::InProgress]
            .into_iter()
            .collect();
        assert_eq!(filter.len(), 2);
    }
}
