use chrono::{DateTime, NaiveDate};
use derive_more::{AsRef, Deref, DerefMut, From};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

use super::*;

/// Number of video slots every influencer carries.
pub const VIDEO_SLOTS: usize = 4;

/// Calendar day a video went live.
///
/// Stored as `YYYY-MM-DD`. Older payloads carry a full RFC 3339 timestamp
/// (as written by a browser `Date`), which is accepted and truncated to its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new, From, Deref, AsRef)]
pub struct PostedDate(NaiveDate);

impl PostedDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl std::str::FromStr for PostedDate {
    type Err = chrono::ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => Ok(Self(date)),
            Err(_) => DateTime::parse_from_rfc3339(input).map(|dt| Self(dt.date_naive())),
        }
    }
}

impl std::fmt::Display for PostedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for PostedDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PostedDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One posted (or not yet posted) piece of content.
///
/// An empty `link` means the slot has not been posted, in which case it has
/// no date and zero views. Stored `null` views count as zero.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub posted_date: Option<PostedDate>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub views: u64,
}

impl Video {
    pub fn posted(link: impl Into<String>, posted_date: Option<PostedDate>, views: u64) -> Self {
        Self {
            link: link.into(),
            posted_date,
            views,
        }
    }

    pub fn is_posted(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Sum of the views across the given videos.
///
/// This is the single definition of an influencer's "current views".
/// Returns `None` when the total does not fit in a `u64`.
pub fn derive_current_views(videos: &[Video]) -> Option<u64> {
    videos
        .iter()
        .try_fold(0u64, |total, video| total.checked_add(video.views))
}

/// The fixed four video slots of an influencer, `Video #1` through `Video #4`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, From, Deref, DerefMut)]
#[serde(transparent)]
pub struct VideoSlots([Video; VIDEO_SLOTS]);

impl VideoSlots {
    pub fn new(videos: [Video; VIDEO_SLOTS]) -> Self {
        Self(videos)
    }

    /// Builds the slots from up to four videos, padding the rest with empty slots.
    ///
    /// Returns `None` when more than four videos are given.
    pub fn from_partial(videos: Vec<Video>) -> Option<Self> {
        if videos.len() > VIDEO_SLOTS {
            return None;
        }

        let mut slots = Self::default();
        for (slot, video) in slots.0.iter_mut().zip(videos) {
            *slot = video;
        }
        Some(slots)
    }

    pub fn checked_current_views(&self) -> Option<u64> {
        derive_current_views(&self.0)
    }

    /// Total views, pinned at `u64::MAX` on overflow. Decoded slots never
    /// overflow, see the `Deserialize` impl.
    pub fn current_views(&self) -> u64 {
        self.checked_current_views().unwrap_or(u64::MAX)
    }

    pub fn views(&self, slot: usize) -> u64 {
        self.0.get(slot).map_or(0, |video| video.views)
    }
}

impl<'de> Deserialize<'de> for VideoSlots {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let videos = Vec::<Video>::deserialize(deserializer)?;
        let count = videos.len();

        let slots = Self::from_partial(videos).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "expected at most {VIDEO_SLOTS} videos but got {count}"
            ))
        })?;

        if slots.checked_current_views().is_none() {
            return Err(serde::de::Error::custom("total video views overflow"));
        }

        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn current_views_sums_every_slot() {
        let slots = VideoSlots::new([
            Video::posted("https://tiktok.com/v/1", None, 1_200_000),
            Video::posted("https://tiktok.com/v/2", None, 847_500),
            Video::posted("https://tiktok.com/v/3", None, 800_000),
            Video::default(),
        ]);

        assert_eq!(slots.current_views(), 2_847_500);
        assert_eq!(derive_current_views(&[]), Some(0));
    }

    #[test]
    fn posted_date_accepts_browser_timestamps() {
        let date: PostedDate = "2024-01-15".parse().unwrap();
        assert_eq!(date, PostedDate::from_ymd(2024, 1, 15).unwrap());

        let date: PostedDate = "2024-01-18T00:00:00.000Z".parse().unwrap();
        assert_eq!(date, PostedDate::from_ymd(2024, 1, 18).unwrap());

        assert!("yesterday".parse::<PostedDate>().is_err());
    }

    #[test]
    fn unposted_video_omits_date() {
        let value = serde_json::to_value(Video::default()).unwrap();
        assert_eq!(value, json!({ "link": "", "views": 0 }));

        let video = Video::posted("https://tiktok.com/v/1", PostedDate::from_ymd(2024, 1, 20), 5);
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(
            value,
            json!({ "link": "https://tiktok.com/v/1", "postedDate": "2024-01-20", "views": 5 })
        );
    }

    #[test]
    fn lenient_video_fields() {
        let video: Video = serde_json::from_value(json!({ "link": "", "postedDate": null })).unwrap();
        assert_eq!(video, Video::default(), "missing views and null dates fall back to empty");

        let video: Video = serde_json::from_value(json!({ "link": "", "views": null })).unwrap();
        assert_eq!(video.views, 0, "null views count as zero");
    }

    #[test]
    fn overflowing_views() {
        let huge = [Video::posted("a", None, u64::MAX), Video::posted("b", None, 1)];
        assert_eq!(derive_current_views(&huge), None);

        let slots = VideoSlots::from_partial(huge.to_vec()).unwrap();
        assert_eq!(slots.checked_current_views(), None);
        assert_eq!(slots.current_views(), u64::MAX);

        let stored = json!([{ "link": "a", "views": u64::MAX }, { "link": "b", "views": 1 }]);
        let err = serde_json::from_value::<VideoSlots>(stored).unwrap_err();
        assert!(err.to_string().contains("overflow"), "{err}");
    }

    #[test]
    fn short_video_lists_are_padded() {
        let slots: VideoSlots = serde_json::from_value(json!([{ "link": "a", "views": 7 }])).unwrap();
        assert_eq!(slots.len(), VIDEO_SLOTS);
        assert_eq!(slots.views(0), 7);
        assert_eq!(slots[3], Video::default());

        let too_many = json!([{}, {}, {}, {}, {}]);
        assert!(serde_json::from_value::<VideoSlots>(too_many).is_err());
    }
}
