use super::*;

/// The demonstration records present at every start-up.
///
/// They are rebuilt from this definition each time and are never persisted,
/// so edits made to them last only for the session.
pub fn seed_records() -> Vec<Influencer> {
    vec![
        seed(
            1,
            "@charlidamelio",
            2_500_000,
            3_000_000,
            [
                Video::posted(
                    "https://www.tiktok.com/@charlidamelio/video/7300000000000000000",
                    PostedDate::from_ymd(2024, 1, 15),
                    1_200_000,
                ),
                Video::posted(
                    "https://www.tiktok.com/@charlidamelio/video/7300000000000000001",
                    PostedDate::from_ymd(2024, 1, 18),
                    847_500,
                ),
                Video::posted(
                    "https://www.tiktok.com/@charlidamelio/video/7300000000000000002",
                    PostedDate::from_ymd(2024, 1, 22),
                    800_000,
                ),
                Video::default(),
            ],
            Status::Posted,
        )
        .with_paid(true),
        seed(
            2,
            "@addisonre",
            1_800_000,
            2_200_000,
            [
                Video::posted(
                    "https://www.tiktok.com/@addisonre/video/7310000000000000000",
                    PostedDate::from_ymd(2024, 1, 20),
                    950_000,
                ),
                Video::default(),
                Video::default(),
                Video::default(),
            ],
            Status::Posted,
        ),
        seed(3, "@khaby.lame", 15_000_000, 18_000_000, Default::default(), Status::InProgress),
        seed(4, "@bellapoarch", 3_200_000, 4_000_000, Default::default(), Status::ScriptNeeded),
        seed(5, "@spencerx", 850_000, 1_200_000, Default::default(), Status::ApproveNeeded),
    ]
}

fn seed(
    id: u64, username: &str, median_views: u64, total_views: u64,
    videos: [Video; VIDEO_SLOTS], status: Status,
) -> Influencer {
    let input = NewInfluencer::new(
        username.to_string(),
        format!("https://www.tiktok.com/{username}"),
        "TikTok".to_string(),
        median_views,
        total_views,
        VideoSlots::new(videos),
        Some(status),
    );

    Influencer::new(InfluencerId::new(id), input, status)
}
