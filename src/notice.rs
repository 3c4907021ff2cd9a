use crate::model::{Influencer, Status};

/// A user-facing notification queued by the store for the UI to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added {
        username: String,
        platform: String,
        status: Status,
    },
    PaidChanged {
        username: String,
        paid: bool,
    },
    Removed {
        username: String,
    },
}

impl Notice {
    pub fn added(influencer: &Influencer) -> Self {
        Self::Added {
            username: influencer.username.clone(),
            platform: influencer.platform.clone(),
            status: influencer.status,
        }
    }

    pub fn paid_changed(influencer: &Influencer) -> Self {
        Self::PaidChanged {
            username: influencer.username.clone(),
            paid: influencer.paid,
        }
    }

    pub fn removed(influencer: &Influencer) -> Self {
        Self::Removed {
            username: influencer.username.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Notice::Added { username, .. } => format!("{username} added to campaign!"),
            Notice::PaidChanged { username, paid: true } => format!("{username} marked as paid!"),
            Notice::PaidChanged { username, paid: false } => format!("{username} marked as unpaid"),
            Notice::Removed { username } => format!("{username} deleted"),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::Added {
                platform, status, ..
            } => format!("Platform: {platform} | Status: {status}"),
            Notice::PaidChanged { paid: true, .. } => "Payment status updated successfully".to_string(),
            Notice::PaidChanged { paid: false, .. } => "Payment status updated".to_string(),
            Notice::Removed { .. } => "Influencer removed from campaign".to_string(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_records;

    #[test]
    fn added_message() {
        let notice = Notice::added(&seed_records()[2]);
        assert_eq!(notice.title(), "@khaby.lame added to campaign!");
        assert_eq!(notice.description(), "Platform: TikTok | Status: In Progress");
    }

    #[test]
    fn paid_messages() {
        let paid = Notice::paid_changed(&seed_records()[0]);
        assert_eq!(
            paid.to_string(),
            "@charlidamelio marked as paid! (Payment status updated successfully)"
        );

        let unpaid = Notice::paid_changed(&seed_records()[1]);
        assert_eq!(unpaid.title(), "@addisonre marked as unpaid");
    }

    #[test]
    fn removed_message() {
        let removed = Notice::removed(&seed_records()[4]);
        assert_eq!(removed.title(), "@spencerx deleted");
        assert_eq!(removed.description(), "Influencer removed from campaign");
    }
}
