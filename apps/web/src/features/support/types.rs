use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: i64,
    pub subject: String,
    pub message: String,
    /// `open`, `answered`, or `closed`.
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTicketRequest {
    pub subject: String,
    pub message: String,
}
