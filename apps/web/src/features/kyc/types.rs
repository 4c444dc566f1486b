use serde::{Deserialize, Serialize};

/// Review status of the caller's KYC submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KycStatus {
    /// `unsubmitted`, `pending`, `approved`, or `rejected`.
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}
