use derive_new::new;
use serde::{Deserialize, Serialize};

pub use influencer::*;
pub use seed::*;
pub use stats::*;
pub use status::*;
pub use video::*;

mod influencer;
mod seed;
mod stats;
mod status;
mod video;
