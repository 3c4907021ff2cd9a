use crate::format::group_digits;

use super::*;

/// Campaign-wide totals over a set of influencer records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    pub count: usize,
    pub total_views_sum: u64,
    pub median_views_sum: u64,
    pub per_video_slot_sum: [u64; VIDEO_SLOTS],
    pub real_reach: u64,
    pub paid_count: usize,
}

impl CampaignStats {
    /// Sums saturate at `u64::MAX` rather than overflow.
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Influencer>) -> Self {
        let mut stats = records
            .into_iter()
            .fold(Self::default(), |mut stats, record| {
                stats.count += 1;
                stats.total_views_sum = stats.total_views_sum.saturating_add(record.total_views);
                stats.median_views_sum = stats.median_views_sum.saturating_add(record.median_views);
                for (slot, sum) in stats.per_video_slot_sum.iter_mut().enumerate() {
                    *sum = sum.saturating_add(record.videos().views(slot));
                }
                if record.paid {
                    stats.paid_count += 1;
                }
                stats
            });

        stats.real_reach = stats
            .per_video_slot_sum
            .iter()
            .fold(0, |total: u64, sum| total.saturating_add(*sum));
        stats
    }

    /// Real reach as a share of the targeted total views.
    pub fn progress(&self) -> Progress {
        if self.total_views_sum == 0 {
            return Progress(0.0);
        }

        Progress(self.real_reach as f64 / self.total_views_sum as f64 * 100.0)
    }
}

impl std::fmt::Display for CampaignStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Influencers: {}", self.count)?;
        writeln!(f, "Total Views: {}", group_digits(self.total_views_sum))?;
        writeln!(f, "Real Reach:  {}", group_digits(self.real_reach))?;
        writeln!(f, "Progress:    {}", self.progress())?;
        write!(f, "Paid:        {}", self.paid_count)
    }
}

/// Campaign progress in percent.
///
/// Displays as a whole percent, except strictly between 0 and 1 where one
/// decimal is kept so that small progress never reads as `0%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(pub f64);

impl Progress {
    pub fn percent(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = self.0;
        if percent > 0.0 && percent < 1.0 {
            write!(f, "{percent:.1}%")
        } else {
            write!(f, "{}%", percent.round())
        }
    }
}
