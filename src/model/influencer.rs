use derive_more::{Display, From};
use serde_with::skip_serializing_none;

use super::*;

/// Highest id used by the seed records. Anything above belongs to the user.
pub const SEED_ID_MAX: u64 = 5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Display,
)]
#[serde(transparent)]
pub struct InfluencerId(u64);

impl InfluencerId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_seed(self) -> bool {
        self.0 <= SEED_ID_MAX
    }
}

/// A tracked campaign participant.
///
/// `current_views` is always the sum of the four video slots; the only way to
/// change the videos is through [`Influencer::set_videos`], which keeps the two
/// in step. Deserialisation goes through the same derivation, so a stored
/// `currentViews` value is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredInfluencer")]
pub struct Influencer {
    pub id: InfluencerId,
    pub username: String,
    pub profile_link: String,
    pub platform: String,
    pub median_views: u64,
    pub total_views: u64,
    current_views: u64,
    videos: VideoSlots,
    pub status: Status,
    pub paid: bool,
}

impl Influencer {
    pub fn new(id: InfluencerId, input: NewInfluencer, status: Status) -> Self {
        let NewInfluencer {
            username,
            profile_link,
            platform,
            median_views,
            total_views,
            videos,
            status: _,
        } = input;

        Self {
            id,
            username,
            profile_link,
            platform,
            median_views,
            total_views,
            current_views: videos.current_views(),
            videos,
            status,
            paid: false,
        }
    }

    pub fn current_views(&self) -> u64 {
        self.current_views
    }

    pub fn videos(&self) -> &VideoSlots {
        &self.videos
    }

    pub fn set_videos(&mut self, videos: VideoSlots) {
        self.current_views = videos.current_views();
        self.videos = videos;
    }

    pub(crate) fn with_paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }
}

/// Shape of an influencer as found in the durable store. `currentViews` is
/// ignored if present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredInfluencer {
    id: InfluencerId,
    username: String,
    profile_link: String,
    platform: String,
    median_views: u64,
    total_views: u64,
    videos: VideoSlots,
    status: Status,
    #[serde(default)]
    paid: bool,
}

impl From<StoredInfluencer> for Influencer {
    fn from(stored: StoredInfluencer) -> Self {
        Self {
            id: stored.id,
            username: stored.username,
            profile_link: stored.profile_link,
            platform: stored.platform,
            median_views: stored.median_views,
            total_views: stored.total_views,
            current_views: stored.videos.current_views(),
            videos: stored.videos,
            status: stored.status,
            paid: stored.paid,
        }
    }
}

/// Input of the add operation: everything but the id, the derived views and
/// the paid flag.
///
/// `status` is optional so that a form which has not picked one yet can be
/// represented and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct NewInfluencer {
    pub username: String,
    pub profile_link: String,
    pub platform: String,
    pub median_views: u64,
    pub total_views: u64,
    #[serde(default)]
    pub videos: VideoSlots,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Partial update of an influencer.
///
/// `None` leaves a field untouched; `Some` overwrites it, including with an
/// empty string.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfluencerPatch {
    pub username: Option<String>,
    pub profile_link: Option<String>,
    pub platform: Option<String>,
    pub median_views: Option<u64>,
    pub total_views: Option<u64>,
    pub videos: Option<VideoSlots>,
    pub status: Option<Status>,
    pub paid: Option<bool>,
}

impl InfluencerPatch {
    pub fn paid(paid: bool) -> Self {
        Self {
            paid: Some(paid),
            ..Self::default()
        }
    }

    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites every field set in the patch.
    pub fn apply(self, influencer: &mut Influencer) {
        let Self {
            username,
            profile_link,
            platform,
            median_views,
            total_views,
            videos,
            status,
            paid,
        } = self;

        if let Some(username) = username {
            influencer.username = username;
        }
        if let Some(profile_link) = profile_link {
            influencer.profile_link = profile_link;
        }
        if let Some(platform) = platform {
            influencer.platform = platform;
        }
        if let Some(median_views) = median_views {
            influencer.median_views = median_views;
        }
        if let Some(total_views) = total_views {
            influencer.total_views = total_views;
        }
        if let Some(videos) = videos {
            influencer.set_videos(videos);
        }
        if let Some(status) = status {
            influencer.status = status;
        }
        if let Some(paid) = paid {
            influencer.paid = paid;
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Influencer {
        let input = NewInfluencer {
            username: "@creator".to_string(),
            profile_link: "https://www.tiktok.com/@creator".to_string(),
            platform: "TikTok".to_string(),
            median_views: 10_000,
            total_views: 50_000,
            videos: VideoSlots::new([
                Video::posted("https://www.tiktok.com/@creator/video/1", PostedDate::from_ymd(2024, 2, 1), 1_000),
                Video::posted("https://www.tiktok.com/@creator/video/2", PostedDate::from_ymd(2024, 2, 3), 2_500),
                Video::default(),
                Video::default(),
            ]),
            status: Some(Status::Posted),
        };
        Influencer::new(InfluencerId::new(1_700_000_000_000), input, Status::Posted)
    }

    #[test]
    fn seed_id_range() {
        assert!(InfluencerId::new(1).is_seed());
        assert!(InfluencerId::new(5).is_seed());
        assert!(!InfluencerId::new(6).is_seed());
    }

    #[test]
    fn new_influencer_derives_views_and_is_unpaid() {
        let influencer = sample();
        assert_eq!(influencer.current_views(), 3_500);
        assert!(!influencer.paid);
    }

    #[test]
    fn stored_current_views_is_not_trusted() {
        let mut value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["currentViews"], json!(3_500));

        value["currentViews"] = json!(999_999_999);
        let restored: Influencer = serde_json::from_value(value).unwrap();
        assert_eq!(restored.current_views(), 3_500);
        assert_eq!(restored, sample());
    }

    #[test]
    fn patch_overwrites_only_given_fields() {
        let mut influencer = sample();
        let patch = InfluencerPatch {
            platform: Some(String::new()),
            total_views: Some(80_000),
            ..InfluencerPatch::default()
        };
        patch.apply(&mut influencer);

        assert_eq!(influencer.platform, "", "Some(\"\") clears the field");
        assert_eq!(influencer.total_views, 80_000);
        assert_eq!(influencer.username, "@creator");
        assert_eq!(influencer.current_views(), 3_500);
    }

    #[test]
    fn patching_videos_recomputes_current_views() {
        let mut influencer = sample();
        let mut videos = influencer.videos().clone();
        videos[2] = Video::posted("https://www.tiktok.com/@creator/video/3", None, 4_000);

        InfluencerPatch {
            videos: Some(videos),
            ..InfluencerPatch::default()
        }
        .apply(&mut influencer);

        assert_eq!(influencer.current_views(), 7_500);
    }

    #[test]
    fn patch_from_json() {
        let patch: InfluencerPatch = serde_json::from_value(json!({ "paid": true })).unwrap();
        assert_eq!(patch, InfluencerPatch::paid(true));
        assert!(!patch.is_empty());
        assert!(InfluencerPatch::default().is_empty());
    }
}
