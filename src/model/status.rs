use snafu::Snafu;

use super::*;

/// Workflow stage of an influencer within the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Script Needed")]
    ScriptNeeded,
    #[serde(rename = "Approve Needed")]
    ApproveNeeded,
    #[serde(rename = "Posted")]
    Posted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Draft Requested")]
    DraftRequested,
}

impl Status {
    /// Every status, in the order the dashboard lists them.
    pub const ALL: [Status; 5] = [
        Status::ScriptNeeded,
        Status::ApproveNeeded,
        Status::Posted,
        Status::InProgress,
        Status::DraftRequested,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ScriptNeeded => "Script Needed",
            Status::ApproveNeeded => "Approve Needed",
            Status::Posted => "Posted",
            Status::InProgress => "In Progress",
            Status::DraftRequested => "Draft Requested",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = ParseStatus;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseStatus::new(input.to_string()))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("Unknown influencer status: {}", text))]
pub struct ParseStatus {
    pub text: String,
}
