use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// `deposit`, `withdraw`, `transfer_in`, `transfer_out`, ...
    pub kind: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub counterparty: Option<String>,
    pub created_at: String,
}
