use dotenvy::dotenv;
use itertools::Itertools;
use snafu::ResultExt;

use campaign_tracker::config::Config;
use campaign_tracker::error::{ApplicationError, OpenStorageSnafu};
use campaign_tracker::format::{group_digits, profile_handle, short_date};
use campaign_tracker::logger;
use campaign_tracker::persistence::FileStore;
use campaign_tracker::{CampaignStore, Influencer};

fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    let backend = FileStore::open(&config.storage_dir).context(OpenStorageSnafu)?;
    tracing::info!(directory = %backend.directory().display(), "opened campaign storage");

    let store = CampaignStore::initialize(backend);

    println!("{}", store.visible_stats());
    println!();
    for influencer in store.filtered_records() {
        println!("{}", row(influencer));
    }

    Ok(())
}

fn row(influencer: &Influencer) -> String {
    let videos = influencer
        .videos()
        .iter()
        .map(|video| match video.posted_date {
            Some(date) => format!("{} {}", short_date(date), group_digits(video.views)),
            None if video.is_posted() => group_digits(video.views),
            None => "-".to_string(),
        })
        .join(" | ");

    format!(
        "{:<20} {:<10} {:>12} {:<16} {:<6} {}",
        profile_handle(&influencer.username),
        influencer.platform,
        group_digits(influencer.current_views()),
        influencer.status,
        if influencer.paid { "paid" } else { "unpaid" },
        videos,
    )
}
