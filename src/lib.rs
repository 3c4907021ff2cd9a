pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logger;
pub mod model;
pub mod notice;
pub mod persistence;
pub mod store;

pub use filter::StatusFilter;
pub use model::{Influencer, InfluencerId, InfluencerPatch, NewInfluencer, Status};
pub use store::CampaignStore;
